//! Bookkeeping tables shared by the solvers.

mod cost;
mod pred;

pub use cost::CostTable;
pub use pred::PredTable;
