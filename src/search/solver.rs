use crate::space::Space;

use super::{log::SearchLog, plan::Plan};

////////////////////////////////////////////////////////////////////////////////

/// Represents a strategy which can search the space for a plan.
/// Every implementation requires exactly the capabilities it consumes.
pub trait Solver<P: Space> {
    /// Searches the space and returns a plan leading to a goal state.
    /// Returns [`None`] if no goal was found before the space
    /// or the configured budgets were exhausted.
    fn solve(&mut self, space: &P) -> Option<Plan<P::Action>>;

    /// Statistics of the last [`solve`][Solver::solve] call.
    fn log(&self) -> &SearchLog;
}
