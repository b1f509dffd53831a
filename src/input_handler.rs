//! Parsing of the lines typed at the `play` prompt.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Move;

static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*[ ,]\s*(\d+)$").expect("PLACE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum PlayerInput {
    /// `<row> <col>`, zero based. `<row>,<col>` works too.
    Place(Move),
    Restart,
    Quit,
}

impl FromStr for PlayerInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "restart" | "r" => return Ok(PlayerInput::Restart),
            "quit" | "q" | "exit" => return Ok(PlayerInput::Quit),
            _ => {}
        }

        let invalid = || InputError::InvalidInput {
            input: input.trim().to_string(),
        };
        let caps = PLACE_RE.captures(&trimmed).ok_or_else(invalid)?;
        let row = caps[1].parse().map_err(|_| invalid())?;
        let column = caps[2].parse().map_err(|_| invalid())?;

        Ok(PlayerInput::Place(Move::new(row, column)))
    }
}

/// Reads one line from stdin. End of input counts as `quit`.
pub fn read_player_input() -> Result<PlayerInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Ok(PlayerInput::Quit);
    }
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placement() {
        assert_eq!(
            "1 2".parse::<PlayerInput>(),
            Ok(PlayerInput::Place(Move::new(1, 2)))
        );
        assert_eq!(
            "  0,2\n".parse::<PlayerInput>(),
            Ok(PlayerInput::Place(Move::new(0, 2)))
        );
        assert_eq!(
            "5 , 6".parse::<PlayerInput>(),
            Ok(PlayerInput::Place(Move::new(5, 6)))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("restart".parse::<PlayerInput>(), Ok(PlayerInput::Restart));
        assert_eq!("QUIT".parse::<PlayerInput>(), Ok(PlayerInput::Quit));
        assert_eq!("q".parse::<PlayerInput>(), Ok(PlayerInput::Quit));
    }

    #[test]
    fn test_parse_invalid() {
        for input in &["", "1", "a b", "1 2 3", "-1 2", "99999999999999999999999 0"] {
            assert_eq!(
                input.parse::<PlayerInput>(),
                Err(InputError::InvalidInput {
                    input: input.trim().to_string()
                }),
                "input {:?}",
                input
            );
        }
    }
}
