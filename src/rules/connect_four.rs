use crate::board::{Board, Move};
use crate::game::config::GameConfig;

use super::streak::evaluate_streak;
use super::{MoveList, RuleSet, TerminalResult};

const STREAK_TO_WIN: usize = 4;

/// Four in a row with gravity: a disc always lands on the lowest empty cell of
/// its column, so each column offers at most one legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl RuleSet for ConnectFour {
    fn name(&self) -> &'static str {
        "Connect Four"
    }

    fn legal_moves(&self, board: &Board) -> MoveList {
        if self.evaluate(board).is_terminal() {
            return MoveList::new();
        }

        (0..board.columns())
            .filter_map(|column| {
                (0..board.rows())
                    .rev()
                    .map(|row| Move::new(row, column))
                    .find(|&target| board.is_empty_at(target))
            })
            .collect()
    }

    fn evaluate(&self, board: &Board) -> TerminalResult {
        evaluate_streak(board, STREAK_TO_WIN)
    }

    fn default_config(&self) -> GameConfig {
        GameConfig::connect_four()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_position;

    #[test]
    fn test_empty_board_offers_bottom_row() {
        let board = Board::new(6, 7);
        let moves = ConnectFour.legal_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.row == 5));
        assert_eq!(moves[0], Move::new(5, 0));
        assert_eq!(moves[6], Move::new(5, 6));
    }

    #[test]
    fn test_discs_stack() {
        let board = grid_position![
            ".......",
            ".......",
            ".......",
            ".......",
            "o......",
            "x.....x",
        ];
        let moves = ConnectFour.legal_moves(&board);
        assert_eq!(moves[0], Move::new(3, 0));
        assert_eq!(moves[1], Move::new(5, 1));
        assert_eq!(moves[6], Move::new(4, 6));
    }

    #[test]
    fn test_full_column_is_skipped() {
        let board = grid_position!["x..", "o..", "x.."];
        let moves = ConnectFour.legal_moves(&board);
        assert_eq!(moves.as_slice(), &[Move::new(2, 1), Move::new(2, 2)]);
    }

    #[test]
    fn test_four_in_a_row_wins() {
        let board = grid_position![
            ".......",
            ".......",
            ".......",
            ".......",
            "ooo....",
            "xxxx...",
        ];
        assert_eq!(ConnectFour.evaluate(&board), TerminalResult::PlayerOneWins);
        assert!(ConnectFour.legal_moves(&board).is_empty());
    }

    #[test]
    fn test_three_in_a_row_is_not_enough() {
        let board = grid_position![
            ".......",
            ".......",
            ".......",
            ".......",
            "oo.....",
            "xxx....",
        ];
        assert_eq!(ConnectFour.evaluate(&board), TerminalResult::Ongoing);
    }

    #[test]
    fn test_rising_diagonal_wins_for_player_two() {
        let board = grid_position![
            ".......",
            ".......",
            "...o...",
            "..ox...",
            ".oxx...",
            "oxxo...",
        ];
        assert_eq!(ConnectFour.evaluate(&board), TerminalResult::PlayerTwoWins);
    }
}
