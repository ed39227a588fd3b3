use std::{collections::HashMap, hash::Hash};

use crate::space::Cost;

////////////////////////////////////////////////////////////////////////////////

/// Best known cost of reaching each seen state from the root.
pub struct CostTable<S> {
    costs: HashMap<S, Cost>,
}

impl<S: Clone + Eq + Hash> CostTable<S> {
    /// Creates the table with the root reached at zero cost.
    pub fn new(root: S) -> Self {
        let mut costs = HashMap::new();
        costs.insert(root, 0);
        Self { costs }
    }

    /// Records the candidate cost if it strictly beats the recorded one,
    /// or if the state was never reached before.
    /// Returns whether the record changed.
    pub fn improve(&mut self, state: &S, candidate: Cost) -> bool {
        if let Some(best) = self.costs.get_mut(state) {
            if *best <= candidate {
                return false;
            }
            *best = candidate;
            return true;
        }
        self.costs.insert(state.clone(), candidate);
        true
    }

    /// Best known cost of the state, if it was ever reached.
    pub fn get(&self, state: &S) -> Option<Cost> {
        self.costs.get(state).copied()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_starts_at_zero() {
        let table = CostTable::new("root");
        assert_eq!(table.get(&"root"), Some(0));
        assert_eq!(table.get(&"other"), None);
    }

    #[test]
    fn first_reach_always_improves() {
        let mut table = CostTable::new("root");
        assert!(table.improve(&"a", 7));
        assert_eq!(table.get(&"a"), Some(7));
    }

    #[test]
    fn only_strictly_better_improves() {
        let mut table = CostTable::new("root");
        assert!(table.improve(&"a", 7));
        assert!(!table.improve(&"a", 7));
        assert!(!table.improve(&"a", 9));
        assert!(table.improve(&"a", 3));
        assert_eq!(table.get(&"a"), Some(3));
    }

    #[test]
    fn root_cost_never_grows() {
        let mut table = CostTable::new("root");
        assert!(!table.improve(&"root", 1));
        assert_eq!(table.get(&"root"), Some(0));
    }
}
