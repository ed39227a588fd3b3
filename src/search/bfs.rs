use std::collections::{HashSet, VecDeque};

use crate::space::Space;

use super::{config::SearchConfig, log::SearchLog, plan::Plan, solver::Solver};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first solver for spaces where every action counts the same:
/// the FIFO frontier dequeues states in action-count layers,
/// so the returned plan has the fewest actions possible.
/// Costs and heuristics are never consulted.
pub struct BfsSolver {
    cfg: SearchConfig,
    log: SearchLog,
}

impl BfsSolver {
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

impl<P: Space> Solver<P> for BfsSolver {
    fn solve(&mut self, space: &P) -> Option<Plan<P::Action>> {
        self.log = SearchLog::new();

        let mut marked = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((space.init(), Vec::new()));

        while let Some((state, path)) = queue.pop_front() {
            // check goal achieved
            if space.goal(&state) {
                return Some(Plan::new(path));
            }

            // mark on dequeue; the first dequeue of a state is at minimal depth
            if !marked.insert(state.clone()) {
                continue;
            }

            // check depth restriction
            if path.len() >= self.cfg.max_depth.unwrap_or(usize::MAX) {
                continue;
            }

            // check expansion restriction
            if self.log.expanded >= self.cfg.max_expanded.unwrap_or(usize::MAX) {
                continue;
            }
            self.log.expanded += 1;

            // branch
            for action in space.actions(&state) {
                let successor = space.apply(&state, &action);
                self.log.generated += 1;

                let mut extended = path.clone();
                extended.push(action);
                queue.push_back((successor, extended));
            }
        }

        None
    }

    fn log(&self) -> &SearchLog {
        &self.log
    }
}
