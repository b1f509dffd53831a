use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for column in 0..self.columns {
            write!(f, "{:>2}", column)?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            write!(f, "{:>2} ", row)?;
            for cell in self.row(row).into_iter().flatten() {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `Board` from row strings, top row first. Panics on malformed rows,
/// so it is meant for tests and fixed positions.
///
/// ```
/// use gridgame::grid_position;
///
/// let board = grid_position![
///     "xx.",
///     "oo.",
///     "...",
/// ];
/// assert_eq!(board.rows(), 3);
/// ```
#[macro_export]
macro_rules! grid_position {
    ($($row:literal),+ $(,)?) => {{
        let rows: &[&str] = &[$($row),+];
        $crate::board::Board::from_rows(rows).expect("grid_position! rows should form a valid board")
    }};
}
