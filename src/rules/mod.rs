//! The per-game rule contract consumed by the search and the turn controller.

pub mod connect_four;
pub mod tictactoe;

mod streak;

use std::fmt;

use smallvec::SmallVec;

use crate::board::{Board, Move, Player};
use crate::game::config::GameConfig;

pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;

/// Legal moves from one position. Small boards never need a heap allocation.
pub type MoveList = SmallVec<[Move; 16]>;

/// Outcome of checking a board for the end of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalResult {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
    Ongoing,
}

impl TerminalResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::Ongoing)
    }

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => TerminalResult::PlayerOneWins,
            Player::Two => TerminalResult::PlayerTwoWins,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            TerminalResult::PlayerOneWins => Some(Player::One),
            TerminalResult::PlayerTwoWins => Some(Player::Two),
            TerminalResult::Draw | TerminalResult::Ongoing => None,
        }
    }
}

impl fmt::Display for TerminalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalResult::PlayerOneWins => write!(f, "player one wins"),
            TerminalResult::PlayerTwoWins => write!(f, "player two wins"),
            TerminalResult::Draw => write!(f, "draw"),
            TerminalResult::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Game-specific policy: which placements are legal and when the game is over.
///
/// Implementations must be pure functions of the board they are given. The
/// search calls both methods from a background thread on its own copy of the
/// board, so implementations carry no mutable state (hence `Send + Sync`), and
/// they are cloned into each computation.
///
/// `legal_moves` does not know whose turn it is; the caller decides the mover.
/// A board that `evaluate` reports as `Ongoing` should always have at least one
/// legal move. The search tolerates a violation (scoring the node as a draw)
/// but reports it.
pub trait RuleSet: Clone + Send + Sync + 'static {
    /// Human readable name of the game.
    fn name(&self) -> &'static str;

    /// All moves playable from `board`, in a stable order.
    fn legal_moves(&self, board: &Board) -> MoveList;

    /// Whether `board` is won, drawn, or still in play. Once a board is
    /// terminal it must keep evaluating to the same result.
    fn evaluate(&self, board: &Board) -> TerminalResult;

    /// Board size and search depth this game is normally played with.
    fn default_config(&self) -> GameConfig;
}
