use crate::board::{Board, Move, Player};

use super::TerminalResult;

// right, down, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns the first player (player one checked first) owning `length`
/// consecutive cells in any row, column or diagonal.
pub(crate) fn find_streak(board: &Board, length: usize) -> Option<Player> {
    if length == 0 {
        return None;
    }

    Player::ALL
        .iter()
        .copied()
        .find(|&player| has_streak(board, player, length))
}

fn has_streak(board: &Board, player: Player, length: usize) -> bool {
    let mark = player.mark();
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            if board.get(Move::new(row, column)) != Some(mark) {
                continue;
            }
            let found = DIRECTIONS.iter().any(|&(dr, dc)| {
                (1..length).all(|step| {
                    let r = row as isize + dr * step as isize;
                    let c = column as isize + dc * step as isize;
                    r >= 0 && c >= 0 && board.get(Move::new(r as usize, c as usize)) == Some(mark)
                })
            });
            if found {
                return true;
            }
        }
    }
    false
}

/// Win-by-streak evaluation shared by the line games: a streak wins, a full
/// board without one is a draw.
pub(crate) fn evaluate_streak(board: &Board, length: usize) -> TerminalResult {
    if let Some(player) = find_streak(board, length) {
        return TerminalResult::win_for(player);
    }

    if board.is_full() {
        TerminalResult::Draw
    } else {
        TerminalResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_position;

    #[test]
    fn test_horizontal_and_vertical() {
        let board = grid_position!["....", "xxx.", "...."];
        assert_eq!(find_streak(&board, 3), Some(Player::One));
        assert_eq!(find_streak(&board, 4), None);

        let board = grid_position![".o..", ".o..", ".o.."];
        assert_eq!(find_streak(&board, 3), Some(Player::Two));
    }

    #[test]
    fn test_diagonals() {
        let board = grid_position!["x...", ".x..", "..x."];
        assert_eq!(find_streak(&board, 3), Some(Player::One));

        let board = grid_position!["...o", "..o.", ".o.."];
        assert_eq!(find_streak(&board, 3), Some(Player::Two));
    }

    #[test]
    fn test_broken_line_is_not_a_streak() {
        let board = grid_position!["xx.x", "....", "...."];
        assert_eq!(find_streak(&board, 3), None);
    }

    #[test]
    fn test_player_one_checked_first() {
        let board = grid_position!["xxx", "ooo", "..."];
        assert_eq!(find_streak(&board, 3), Some(Player::One));
        assert_eq!(evaluate_streak(&board, 3), TerminalResult::PlayerOneWins);
    }

    #[test]
    fn test_evaluate_streak_draw() {
        let board = grid_position!["xox", "xoo", "oxx"];
        assert_eq!(evaluate_streak(&board, 3), TerminalResult::Draw);
    }
}
