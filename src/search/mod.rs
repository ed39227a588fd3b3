mod astar;
mod bfs;
mod climb;
mod config;
mod dijkstra;
mod log;
mod plan;
mod solver;

#[cfg(test)]
mod tests;

////////////////////////////////////////////////////////////////////////////////

pub use astar::AstarSolver;
pub use bfs::BfsSolver;
pub use climb::HillClimbSolver;
pub use config::{SearchConfig, SearchConfigBuilder};
pub use dijkstra::DijkstraSolver;
pub use log::SearchLog;
pub use plan::Plan;
pub use solver::Solver;
