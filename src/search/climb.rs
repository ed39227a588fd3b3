use crate::space::{Cost, Informed};

use super::{config::SearchConfig, log::SearchLog, plan::Plan, solver::Solver};

////////////////////////////////////////////////////////////////////////////////

/// Greedy descent on the heuristic, without any bookkeeping:
/// every step moves to the first strictly improving successor
/// with the minimal estimate. Cheap, but gets stuck at local minima
/// and plateaus, and never accounts for action costs.
pub struct HillClimbSolver {
    cfg: SearchConfig,
    log: SearchLog,
}

impl HillClimbSolver {
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
}

impl<P: Informed> Solver<P> for HillClimbSolver {
    fn solve(&mut self, space: &P) -> Option<Plan<P::Action>> {
        self.log = SearchLog::new();

        // both budgets restrict the number of descent steps
        let max_steps = self
            .cfg
            .max_depth
            .unwrap_or(usize::MAX)
            .min(self.cfg.max_expanded.unwrap_or(usize::MAX));

        let mut state = space.init();
        let mut actions = Vec::new();

        loop {
            // check goal achieved
            if space.goal(&state) {
                return Some(Plan::new(actions));
            }

            // check step restriction
            if actions.len() >= max_steps {
                return None;
            }

            self.log.expanded += 1;
            let here = space.heuristic(&state);

            // first minimal successor among the strictly improving ones
            let mut best: Option<(Cost, P::State, P::Action)> = None;
            for action in space.actions(&state) {
                let successor = space.apply(&state, &action);
                self.log.generated += 1;

                let estimate = space.heuristic(&successor);
                if estimate >= here {
                    continue;
                }
                let improves = match &best {
                    Some((minimal, _, _)) => estimate < *minimal,
                    None => true,
                };
                if improves {
                    best = Some((estimate, successor, action));
                }
            }

            match best {
                Some((_, successor, action)) => {
                    actions.push(action);
                    state = successor;
                }
                // stuck at a local minimum or a plateau
                None => return None,
            }
        }
    }

    fn log(&self) -> &SearchLog {
        &self.log
    }
}
