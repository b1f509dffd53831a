//! Compact text notation for boards: rows separated by `/`, one character per
//! cell (`.` empty, `x` player one, `o` player two). `"xx./oo./..."` is a 3x3
//! board with two marks for each side.

use std::str::FromStr;

use super::error::ParseBoardError;
use super::{Board, CellState};

impl Board {
    pub fn to_notation(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.row(row)
                    .into_iter()
                    .flatten()
                    .map(CellState::to_char)
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Builds a board from a list of row strings, top row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseBoardError> {
        let expected = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(ParseBoardError::Empty),
        };
        if expected == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != expected {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found,
                    expected,
                });
            }

            for c in text.chars() {
                let cell = CellState::from_char(c)
                    .ok_or(ParseBoardError::InvalidCell { row, found: c })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns: expected,
            cells,
        })
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = notation.trim().split('/').map(str::trim).collect();
        Self::from_rows(&rows)
    }
}
