//! Play command - play a game against the computer.

use gridgame::game::{GameConfig, GameKind, TurnController, TurnState};
use gridgame::input_handler::{read_player_input, InputError, PlayerInput};
use gridgame::rules::RuleSet;
use log::error;
use structopt::StructOpt;

use super::util::{create_config, with_rules};
use super::Command;
use crate::cli::console::ConsoleSink;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "tic-tac-toe")]
    pub game: GameKind,
    #[structopt(short, long)]
    pub depth: Option<u8>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = match create_config(self.game, self.depth) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{}", error);
                return;
            }
        };
        with_rules!(self.game, run_game_loop(config));
    }
}

fn run_game_loop<R: RuleSet>(rules: R, config: GameConfig) {
    println!(
        "{}: enter `<row> <col>` to place your mark, `restart` or `quit`.",
        rules.name()
    );
    let mut controller = TurnController::start(rules, ConsoleSink, config);
    println!("{}", controller.board());

    loop {
        match controller.state() {
            TurnState::ComputingOpponent => {
                // the sink has already reported a failure
                let _ = controller.wait_for_opponent();
                println!("{}", controller.board());
                continue;
            }
            TurnState::AwaitingHuman => println!("Enter your move:"),
            TurnState::Finished => println!("Type `restart` to play again or `quit`."),
        }

        let input = match read_player_input() {
            Ok(input) => input,
            Err(InputError::IOError { error }) => {
                error!("failed to read from stdin: {}", error);
                return;
            }
            Err(error) => {
                println!("{}", error);
                continue;
            }
        };

        match input {
            PlayerInput::Quit => return,
            PlayerInput::Restart => {
                controller.restart(controller.config());
                println!("{}", controller.board());
            }
            PlayerInput::Place(target) => match controller.apply_human_move(target) {
                Ok(()) => println!("{}", controller.board()),
                Err(error) => println!("{}", error),
            },
        }
    }
}
