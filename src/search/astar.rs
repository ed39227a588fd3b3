use std::collections::HashSet;

use crate::{
    frontier::{Frontier, HeapFrontier},
    space::Informed,
    table::{CostTable, PredTable},
};

use super::{config::SearchConfig, log::SearchLog, plan::Plan, solver::Solver};

////////////////////////////////////////////////////////////////////////////////

/// Best-first solver ordering the frontier by the cost spent so far
/// plus the heuristic estimate of the cost remaining.
/// With an admissible heuristic the returned plan has minimal total cost.
pub struct AstarSolver {
    cfg: SearchConfig,
    log: SearchLog,
}

impl AstarSolver {
    pub fn new(cfg: SearchConfig) -> Self {
        Self {
            cfg,
            log: SearchLog::new(),
        }
    }

    /// Statistics of the last solve call.
    pub fn log(&self) -> &SearchLog {
        &self.log
    }

    /// Runs the search on top of the provided frontier implementation.
    pub fn solve_with<P, F>(&mut self, space: &P) -> Option<Plan<P::Action>>
    where
        P: Informed,
        F: Frontier<P::State>,
    {
        self.log = SearchLog::new();

        let root = space.init();
        let mut costs = CostTable::new(root.clone());
        let mut preds = PredTable::new(root.clone());
        let mut marked = HashSet::new();
        let mut frontier = F::seeded(space.heuristic(&root), root);

        while let Some((_, state)) = frontier.pop() {
            // check goal achieved
            if space.goal(&state) {
                return Some(Plan::new(preds.build(&state)));
            }

            // skip stale frontier duplicates
            if !marked.insert(state.clone()) {
                continue;
            }

            // check expansion restriction
            if self.log.expanded >= self.cfg.max_expanded.unwrap_or(usize::MAX) {
                continue;
            }
            self.log.expanded += 1;

            // branch, relaxing every successor
            let reached = costs.get(&state).unwrap();
            for action in space.actions(&state) {
                let successor = space.apply(&state, &action);
                self.log.generated += 1;

                let candidate = reached + space.cost(&action);
                if costs.improve(&successor, candidate) {
                    preds.set(&state, &action, &successor);
                    frontier.push(candidate + space.heuristic(&successor), successor);
                }
            }
        }

        None
    }
}

impl<P: Informed> Solver<P> for AstarSolver {
    fn solve(&mut self, space: &P) -> Option<Plan<P::Action>> {
        self.solve_with::<P, HeapFrontier<P::State>>(space)
    }

    fn log(&self) -> &SearchLog {
        &self.log
    }
}
