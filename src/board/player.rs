use std::fmt;

use super::cell_state::CellState;

/// One of the two sides of a game. `One` is always the human and moves first;
/// `Two` is the computer opponent and is the maximizing side during search.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::Two => true,
            Player::One => false,
        }
    }

    /// The mark this player leaves on a cell.
    pub fn mark(&self) -> CellState {
        match self {
            Player::One => CellState::PlayerOne,
            Player::Two => CellState::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{}", player_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::One.opposite(), Player::Two);
        assert_eq!(Player::Two.opposite(), Player::One);
    }

    #[test]
    fn test_only_player_two_maximizes() {
        assert!(Player::Two.maximize_score());
        assert!(!Player::One.maximize_score());
    }

    #[test]
    fn test_mark() {
        assert_eq!(Player::One.mark(), CellState::PlayerOne);
        assert_eq!(Player::Two.mark(), CellState::PlayerTwo);
    }
}
