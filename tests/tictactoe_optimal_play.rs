//! The full-depth opponent never loses a tic-tac-toe game, whatever the
//! human plays.

use gridgame::board::{Board, Move, Player};
use gridgame::rules::{RuleSet, TerminalResult, TicTacToe};
use gridgame::search::search_opponent_move;

#[derive(Default)]
struct Tally {
    games: usize,
    opponent_wins: usize,
    draws: usize,
}

fn play_every_line(board: &mut Board, tally: &mut Tally) {
    for human_move in TicTacToe.legal_moves(board) {
        board.place(human_move, Player::One).unwrap();

        match TicTacToe.evaluate(board) {
            TerminalResult::PlayerOneWins => panic!("human won on `{}`", board.to_notation()),
            TerminalResult::Draw => {
                tally.games += 1;
                tally.draws += 1;
            }
            TerminalResult::PlayerTwoWins => unreachable!("the human moved last"),
            TerminalResult::Ongoing => {
                let report = search_opponent_move(&TicTacToe, board, 9);
                let reply = report
                    .result
                    .best_move
                    .unwrap_or_else(|| panic!("no reply on `{}`", board.to_notation()));
                board.place(reply, Player::Two).unwrap();

                match TicTacToe.evaluate(board) {
                    TerminalResult::PlayerTwoWins => {
                        tally.games += 1;
                        tally.opponent_wins += 1;
                    }
                    TerminalResult::Draw => {
                        tally.games += 1;
                        tally.draws += 1;
                    }
                    TerminalResult::Ongoing => play_every_line(board, tally),
                    TerminalResult::PlayerOneWins => unreachable!("the opponent moved last"),
                }

                board.clear(reply).unwrap();
            }
        }

        board.clear(human_move).unwrap();
    }
}

#[test]
fn test_full_depth_opponent_never_loses() {
    let mut board = Board::new(3, 3);
    let mut tally = Tally::default();

    play_every_line(&mut board, &mut tally);

    assert_eq!(board, Board::new(3, 3));
    assert!(tally.games > 0);
    assert_eq!(tally.games, tally.opponent_wins + tally.draws);
    assert!(tally.opponent_wins > 0, "weak human lines should be punished");
}

#[test]
fn test_opponent_takes_win_over_block() {
    // both sides threaten a row; winning now beats blocking
    let board: Board = "xx./oo./x..".parse().unwrap();
    let report = search_opponent_move(&TicTacToe, &board, 9);
    assert_eq!(report.result.best_move, Some(Move::new(1, 2)));
    assert_eq!(report.result.score, 9);
}
