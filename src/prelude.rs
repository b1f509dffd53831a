//! Common types re-exported for convenience.

pub use crate::board::{Board, CellState, Move, Player};
pub use crate::game::{
    GameConfig, GameError, GameEvent, GameKind, PresentationSink, TurnController, TurnState,
};
pub use crate::rules::{ConnectFour, MoveList, RuleSet, TerminalResult, TicTacToe};
pub use crate::search::{search_opponent_move, SearchEngine, SearchReport, SearchStats};
