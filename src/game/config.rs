use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a board needs at least one row")]
    ZeroRows,
    #[error("a board needs at least one column")]
    ZeroColumns,
    #[error("the opponent must search at least one move ahead")]
    ZeroDepth,
}

/// Per-session parameters, fixed from `start`/`restart` until the next one.
///
/// The fields are only readable, so a config cannot change under a game or
/// under a search that was launched with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    columns: usize,
    max_depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::tictactoe()
    }
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, max_depth: u8) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(Self {
            rows,
            columns,
            max_depth,
        })
    }

    /// 3x3, searched to the end of the game.
    pub const fn tictactoe() -> Self {
        Self {
            rows: 3,
            columns: 3,
            max_depth: 9,
        }
    }

    /// 6x7, searched seven plies ahead.
    pub const fn connect_four() -> Self {
        Self {
            rows: 6,
            columns: 7,
            max_depth: 7,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of plies the opponent search looks ahead.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Same board, different search depth.
    pub fn with_max_depth(self, max_depth: u8) -> Result<Self, ConfigError> {
        Self::new(self.rows, self.columns, max_depth)
    }
}
