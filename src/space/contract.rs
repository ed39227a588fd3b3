use std::hash::Hash;

////////////////////////////////////////////////////////////////////////////////

/// Cost of a single action; also the unit of heuristic estimates.
pub type Cost = u64;

////////////////////////////////////////////////////////////////////////////////

/// Abstract description of a search problem: state and action types, the
/// initial state, the goal test and the transition function.
///
/// The state graph stays implicit and may be unbounded: solvers only ask for
/// the actions of states they expand and never materialize the graph.
pub trait Space {
    /// Opaque problem state, used as a map and set key by the solvers.
    type State: Clone + Eq + Hash;

    /// Opaque edge label transforming one state into another
    /// via [`Space::apply`].
    type Action: Clone;

    /// The state the search starts from.
    fn init(&self) -> Self::State;

    /// Checks whether the state achieves the search goal.
    fn goal(&self, state: &Self::State) -> bool;

    /// Actions available in the state.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking the action in the state.
    /// Pure: returns a fresh state, never mutates in place.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

////////////////////////////////////////////////////////////////////////////////

/// Space whose actions carry individual costs
/// (see [`DijkstraSolver`](crate::DijkstraSolver)).
pub trait Weighted: Space {
    /// Cost of taking the action.
    fn cost(&self, action: &Self::Action) -> Cost;
}

////////////////////////////////////////////////////////////////////////////////

/// Weighted space with an estimate of the remaining cost to a goal
/// (see [`AstarSolver`](crate::AstarSolver) and
/// [`HillClimbSolver`](crate::HillClimbSolver)).
pub trait Informed: Weighted {
    /// Estimate of the cost remaining from the state to the nearest goal.
    ///
    /// Whether the estimate ever overestimates the true remaining cost is
    /// the problem author's concern: it decides best-first optimality, not
    /// termination.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
