use super::contract::Space;

////////////////////////////////////////////////////////////////////////////////

/// Payoff of a terminal game state.
pub type Utility = i64;

////////////////////////////////////////////////////////////////////////////////

/// Two-player game space: a [`Space`] whose terminal states carry a payoff.
///
/// Data contract only. No solver in this crate traverses game trees; the
/// trait exists so game definitions can share state, action and transition
/// declarations with the path solvers.
pub trait Game: Space {
    /// Utility of a terminal state from the first player's perspective.
    fn utility(&self, state: &Self::State) -> Utility;
}

////////////////////////////////////////////////////////////////////////////////

/// Game played by an arbitrary number of players taking turns.
pub trait MultiGame: Game {
    /// Number of players.
    fn players(&self) -> usize;

    /// Index of the player to move in the state, in `0..players()`.
    fn which(&self, state: &Self::State) -> usize;
}
