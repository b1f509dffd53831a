use std::fmt;

use thiserror::Error;

use crate::board::{BoardError, Move};

use super::config::ConfigError;
use super::state::TurnState;

/// Why a human move was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    Occupied,
    /// In bounds and empty, but the rule set does not offer it (e.g. a disc
    /// that would float above an empty cell).
    NotLegal,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::OutOfBounds => "outside the board",
            MoveRejection::Occupied => "cell already taken",
            MoveRejection::NotLegal => "not a legal move in this game",
        };
        write!(f, "{}", reason)
    }
}

impl From<&BoardError> for MoveRejection {
    fn from(error: &BoardError) -> Self {
        match error {
            BoardError::OutOfBounds { .. } => MoveRejection::OutOfBounds,
            BoardError::CellOccupied { .. } => MoveRejection::Occupied,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move {target}: {reason}")]
    InvalidMove { target: Move, reason: MoveRejection },
    #[error("Not your turn, the game is {state}")]
    NotYourTurn { state: TurnState },
    #[error("The opponent found no legal move on a board that is still in play")]
    NoLegalMove,
    #[error("The opponent chose {target}, which cannot be played: {error}")]
    IllegalOpponentMove { target: Move, error: BoardError },
    #[error("The opponent search panicked")]
    SearchPanicked,
    #[error("The opponent search could not be started: {error}")]
    SearchUnavailable { error: String },
    #[error("Invalid game config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl GameError {
    /// Errors that end the current game instance. Everything else is reported
    /// to the caller and leaves the game as it was.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::NoLegalMove
                | GameError::IllegalOpponentMove { .. }
                | GameError::SearchPanicked
                | GameError::SearchUnavailable { .. }
        )
    }
}
