//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "gridgame",
    about = "Tic-tac-toe and Connect Four against a minimax opponent"
)]
pub enum GridGame {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which answers each move with an alpha-beta search at the given `--depth` (default: the game's own depth). Choose the game with `--game` (tic-tac-toe or connect-four, default: tic-tac-toe). You always move first, as `x`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-move",
        about = "Search the best move for whoever is to move on the board given with `--board` (rows separated by `/`, `.` empty, `x` and `o` for the players, e.g. `xx./oo./...`). Use `--no-pruning` to run plain minimax and compare the node counts."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for GridGame {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            BestMove(cmd),
        }
    }
}
