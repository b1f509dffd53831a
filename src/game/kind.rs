use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rules::{ConnectFour, RuleSet, TicTacToe};

use super::config::GameConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown game `{input}`; options are: tic-tac-toe, connect-four")]
pub struct ParseGameKindError {
    input: String,
}

/// The games the binary knows how to set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => TicTacToe.name(),
            GameKind::ConnectFour => ConnectFour.name(),
        }
    }

    pub fn default_config(&self) -> GameConfig {
        match self {
            GameKind::TicTacToe => TicTacToe.default_config(),
            GameKind::ConnectFour => ConnectFour.default_config(),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::ConnectFour => "connect-four",
        };
        write!(f, "{}", kind)
    }
}

impl FromStr for GameKind {
    type Err = ParseGameKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "tic-tac-toe" | "tictactoe" | "ttt" => Ok(GameKind::TicTacToe),
            "connect-four" | "connectfour" | "c4" => Ok(GameKind::ConnectFour),
            _ => Err(ParseGameKindError {
                input: input.to_string(),
            }),
        }
    }
}
