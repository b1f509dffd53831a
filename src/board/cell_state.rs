use std::fmt;

use super::player::Player;

/// The contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::PlayerOne => 'x',
            CellState::PlayerTwo => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Empty),
            'x' | 'X' => Some(CellState::PlayerOne),
            'o' | 'O' => Some(CellState::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
