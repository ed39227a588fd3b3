use crate::space::{Cost, Informed, Space, Weighted};

use super::{astar::AstarSolver, config::SearchConfig, log::SearchLog, plan::Plan, solver::Solver};

////////////////////////////////////////////////////////////////////////////////

/// Uniform-cost solver:
/// the best-first engine specialized with the zero heuristic.
/// Always returns a minimal-total-cost plan when one exists
/// and the reachable space is finite.
pub struct DijkstraSolver {
    inner: AstarSolver,
}

impl DijkstraSolver {
    pub fn new(cfg: SearchConfig) -> Self {
        Self {
            inner: AstarSolver::new(cfg),
        }
    }

    /// Statistics of the last solve call.
    pub fn log(&self) -> &SearchLog {
        self.inner.log()
    }
}

impl<P: Weighted> Solver<P> for DijkstraSolver {
    fn solve(&mut self, space: &P) -> Option<Plan<P::Action>> {
        self.inner.solve(&ZeroEstimate(space))
    }

    fn log(&self) -> &SearchLog {
        self.inner.log()
    }
}

////////////////////////////////////////////////////////////////////////////////

// wrapper turning any weighted space into an informed one with zero estimates
struct ZeroEstimate<'a, P>(&'a P);

impl<P: Weighted> Space for ZeroEstimate<'_, P> {
    type State = P::State;
    type Action = P::Action;

    fn init(&self) -> Self::State {
        self.0.init()
    }

    fn goal(&self, state: &Self::State) -> bool {
        self.0.goal(state)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.0.actions(state)
    }

    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.0.apply(state, action)
    }
}

impl<P: Weighted> Weighted for ZeroEstimate<'_, P> {
    fn cost(&self, action: &Self::Action) -> Cost {
        self.0.cost(action)
    }
}

impl<P: Weighted> Informed for ZeroEstimate<'_, P> {
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0
    }
}
