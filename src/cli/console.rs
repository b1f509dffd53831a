//! Prints controller events to stdout.

use gridgame::board::Player;
use gridgame::game::{GameEvent, PresentationSink};

/// Reports what happened in words. The board itself is drawn by the command
/// loop, which owns the controller.
pub struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnChanged { player: Player::One } => println!("Your move."),
            GameEvent::TurnChanged { player: Player::Two } => {
                println!("The computer is thinking...")
            }
            GameEvent::BoardUpdated { target, mover } => {
                println!("{} ({}) played {}", mover, mover.mark(), target)
            }
            GameEvent::GameOver { result } => match result.winner() {
                Some(Player::One) => println!("You win!"),
                Some(Player::Two) => println!("The computer wins."),
                None => println!("It's a draw."),
            },
            GameEvent::OpponentFailed { error } => {
                eprintln!("The computer cannot continue: {}", error)
            }
        }
    }
}
