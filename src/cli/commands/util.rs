//! Shared utilities for CLI commands.

use gridgame::game::{GameConfig, GameError, GameKind};

/// The game's own config, with the search depth overridden when one was given.
pub(crate) fn create_config(game: GameKind, depth: Option<u8>) -> Result<GameConfig, GameError> {
    let config = game.default_config();
    match depth {
        Some(depth) => Ok(config.with_max_depth(depth)?),
        None => Ok(config),
    }
}

/// Calls the generic `$run` with the rule set matching `$game`, followed by
/// `$args`.
macro_rules! with_rules {
    ($game:expr, $run:ident($($args:expr),* $(,)?)) => {
        match $game {
            gridgame::game::GameKind::TicTacToe => {
                $run(gridgame::rules::TicTacToe, $($args),*)
            }
            gridgame::game::GameKind::ConnectFour => {
                $run(gridgame::rules::ConnectFour, $($args),*)
            }
        }
    };
}

pub(crate) use with_rules;
