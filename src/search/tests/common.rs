use crate::{
    search::Plan,
    space::{Cost, Informed, Space, Weighted},
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Obstacle-free rectangular grid with unit-cost moves:
/// start at the top-left corner, goal at the bottom-right one.
/// The Manhattan distance to the goal serves as an admissible heuristic.
pub struct GridWorld {
    width: i64,
    height: i64,
}

impl GridWorld {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl Space for GridWorld {
    type State = (i64, i64);
    type Action = Move;

    fn init(&self) -> (i64, i64) {
        (0, 0)
    }

    fn goal(&self, state: &(i64, i64)) -> bool {
        *state == (self.width - 1, self.height - 1)
    }

    fn actions(&self, &(x, y): &(i64, i64)) -> Vec<Move> {
        let mut moves = Vec::new();
        if y > 0 {
            moves.push(Move::Up);
        }
        if y + 1 < self.height {
            moves.push(Move::Down);
        }
        if x > 0 {
            moves.push(Move::Left);
        }
        if x + 1 < self.width {
            moves.push(Move::Right);
        }
        moves
    }

    fn apply(&self, &(x, y): &(i64, i64), action: &Move) -> (i64, i64) {
        match action {
            Move::Up => (x, y - 1),
            Move::Down => (x, y + 1),
            Move::Left => (x - 1, y),
            Move::Right => (x + 1, y),
        }
    }
}

impl Weighted for GridWorld {
    fn cost(&self, _action: &Move) -> Cost {
        1
    }
}

impl Informed for GridWorld {
    fn heuristic(&self, &(x, y): &(i64, i64)) -> Cost {
        (self.width - 1 - x).unsigned_abs() + (self.height - 1 - y).unsigned_abs()
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Applies the plan action by action from the initial state
/// and checks it ends in a goal state.
pub fn replay<P: Space>(space: &P, plan: &Plan<P::Action>) {
    let mut state = space.init();
    for action in plan.iter() {
        state = space.apply(&state, action);
    }
    assert!(space.goal(&state));
}
