pub mod cell_state;
pub mod error;
pub mod grid_move;
pub mod player;

mod display;
mod notation;

pub use cell_state::CellState;
pub use error::{BoardError, ParseBoardError};
pub use grid_move::Move;
pub use player::Player;

/// A fixed `rows × columns` grid of cell states, stored row-major.
///
/// `Board` has no game knowledge of its own: which placements are legal and
/// when the game is over is decided by a `RuleSet`. Cloning a board copies the
/// cell storage, so a clone can be handed to another thread and mutated freely
/// without the original ever observing it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-empty board.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![CellState::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn in_bounds(&self, target: Move) -> bool {
        target.row < self.rows && target.column < self.columns
    }

    #[inline(always)]
    fn index(&self, target: Move) -> Option<usize> {
        if self.in_bounds(target) {
            Some(target.row * self.columns + target.column)
        } else {
            None
        }
    }

    /// Returns the cell at `target`, or `None` when it is off the board.
    #[inline(always)]
    pub fn get(&self, target: Move) -> Option<CellState> {
        self.index(target).map(|i| self.cells[i])
    }

    pub fn is_empty_at(&self, target: Move) -> bool {
        self.get(target) == Some(CellState::Empty)
    }

    /// Marks an empty cell for `player`.
    pub fn place(&mut self, target: Move, player: Player) -> Result<(), BoardError> {
        let index = self.index(target).ok_or(BoardError::OutOfBounds {
            target,
            rows: self.rows,
            columns: self.columns,
        })?;

        if !self.cells[index].is_empty() {
            return Err(BoardError::CellOccupied { target });
        }

        self.cells[index] = player.mark();
        Ok(())
    }

    /// Restores `target` to empty, returning whatever was there before.
    pub fn clear(&mut self, target: Move) -> Result<CellState, BoardError> {
        let index = self.index(target).ok_or(BoardError::OutOfBounds {
            target,
            rows: self.rows,
            columns: self.columns,
        })?;

        Ok(std::mem::take(&mut self.cells[index]))
    }

    /// The cells of one row, left to right, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[CellState]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.cells.get(start..start + self.columns)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| Move::new(i / columns, i % columns))
    }

    /// The side to move next, assuming player one opened and turns alternated.
    pub fn next_to_move(&self) -> Player {
        if self.count(CellState::PlayerOne) > self.count(CellState::PlayerTwo) {
            Player::Two
        } else {
            Player::One
        }
    }
}
