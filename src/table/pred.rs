use std::{collections::HashMap, hash::Hash};

////////////////////////////////////////////////////////////////////////////////

enum Link<S, A> {
    Root,
    Reached { parent: S, action: A },
}

////////////////////////////////////////////////////////////////////////////////

/// Predecessor link per reached state, allowing to rebuild the action
/// sequence which led from the root to any of them.
pub struct PredTable<S, A> {
    links: HashMap<S, Link<S, A>>,
}

impl<S: Clone + Eq + Hash, A: Clone> PredTable<S, A> {
    /// Creates the table with the root marked as the walk terminator.
    pub fn new(root: S) -> Self {
        let mut links = HashMap::new();
        links.insert(root, Link::Root);
        Self { links }
    }

    /// Records that the child was reached from the parent by the action.
    /// A repeated record for the same child replaces the previous one,
    /// while the root record is kept as is.
    pub fn set(&mut self, parent: &S, action: &A, child: &S) {
        if matches!(self.links.get(child), Some(Link::Root)) {
            return;
        }
        self.links.insert(
            child.clone(),
            Link::Reached {
                parent: parent.clone(),
                action: action.clone(),
            },
        );
    }

    /// Rebuilds the root-to-state action sequence by walking the links.
    /// The state must have been recorded before.
    pub fn build(&self, state: &S) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = state;
        loop {
            match self.links.get(current) {
                Some(Link::Root) => break,
                Some(Link::Reached { parent, action }) => {
                    actions.push(action.clone());
                    current = parent;
                }
                None => panic!("state was never recorded"),
            }
        }
        actions.reverse();
        actions
    }
}

////////////////////////////////////////////////////////////////////////////////
