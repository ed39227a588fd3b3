mod frontier;
mod search;
mod space;
mod table;

////////////////////////////////////////////////////////////////////////////////

pub use space::{
    Cost, Edge, Game, GraphDef, GraphError, GraphSpace, Informed, MultiGame, Space, Utility,
    Weighted,
};

pub use search::{
    AstarSolver, BfsSolver, DijkstraSolver, HillClimbSolver, Plan, SearchConfig,
    SearchConfigBuilder, SearchLog, Solver,
};

pub use table::{CostTable, PredTable};

pub use frontier::{Frontier, HeapFrontier};
