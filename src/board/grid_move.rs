use std::fmt;

/// A placement on the board, addressed by zero-based `(row, column)`.
///
/// A `Move` says nothing about who makes it; the mover is decided by whoever
/// applies it (the controller for live play, the search for each ply).
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
