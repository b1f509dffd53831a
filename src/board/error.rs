use thiserror::Error;

use super::grid_move::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a mark at {target}, it is outside the {rows}x{columns} board")]
    OutOfBounds {
        target: Move,
        rows: usize,
        columns: usize,
    },
    #[error("Cannot place a mark at {target}, the cell is already occupied")]
    CellOccupied { target: Move },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("board notation is empty")]
    Empty,
    #[error("invalid cell character {found:?} in row {row}")]
    InvalidCell { row: usize, found: char },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}
