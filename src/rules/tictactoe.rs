use crate::board::Board;
use crate::game::config::GameConfig;

use super::streak::evaluate_streak;
use super::{MoveList, RuleSet, TerminalResult};

const STREAK_TO_WIN: usize = 3;

/// Three in a row on a free-placement grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl RuleSet for TicTacToe {
    fn name(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn legal_moves(&self, board: &Board) -> MoveList {
        if self.evaluate(board).is_terminal() {
            return MoveList::new();
        }
        board.empty_cells().collect()
    }

    fn evaluate(&self, board: &Board) -> TerminalResult {
        evaluate_streak(board, STREAK_TO_WIN)
    }

    fn default_config(&self) -> GameConfig {
        GameConfig::tictactoe()
    }
}
