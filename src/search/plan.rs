use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::space::Cost;

////////////////////////////////////////////////////////////////////////////////

/// Represents a solution found by a solver:
/// the ordered sequence of actions leading from the initial state to a goal.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan<A> {
    actions: Vec<A>,
}

impl<A> Plan<A> {
    pub(crate) fn new(actions: Vec<A>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Checks the plan is empty,
    /// which means the initial state is already a goal.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn action(&self, i: usize) -> &A {
        self.actions.get(i).unwrap()
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.actions.iter()
    }

    /// Sums the provided per-action cost over the whole plan.
    pub fn cost_by(&self, cost: impl Fn(&A) -> Cost) -> Cost {
        self.actions.iter().map(cost).sum()
    }
}

impl<A: Debug> Debug for Plan<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plan").field("actions", &self.actions).finish()
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for a in self.actions.iter() {
            writeln!(f, "{}", a)?;
        }
        Ok(())
    }
}
