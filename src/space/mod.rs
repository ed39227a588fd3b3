//! Definitions of the search space contracts and ready-made spaces.

mod contract;
mod game;
mod graph;

pub use contract::{Cost, Informed, Space, Weighted};
pub use game::{Game, MultiGame, Utility};
pub use graph::{Edge, GraphDef, GraphError, GraphSpace};
