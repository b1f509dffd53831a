use std::sync::mpsc;

use crate::board::{Move, Player};
use crate::rules::TerminalResult;

use super::error::GameError;

/// Notifications emitted by the turn controller, in the order things happen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// `player` is now to move.
    TurnChanged { player: Player },
    /// `mover` placed a mark at `target`.
    BoardUpdated { target: Move, mover: Player },
    /// The game ended normally.
    GameOver { result: TerminalResult },
    /// The opponent computation failed and the game cannot continue.
    OpponentFailed { error: GameError },
}

/// Receives controller events, typically to redraw a board.
///
/// Handlers run on the controller's thread in the middle of a transition, so
/// they must not call back into the controller.
pub trait PresentationSink {
    fn handle(&mut self, event: &GameEvent);
}

/// Records every event, mostly useful in tests.
impl PresentationSink for Vec<GameEvent> {
    fn handle(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Forwards events to another thread. A closed receiver is ignored.
impl PresentationSink for mpsc::Sender<GameEvent> {
    fn handle(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn handle(&mut self, event: &GameEvent) {
        (**self).handle(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn handle(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink = Vec::new();
        sink.handle(&GameEvent::TurnChanged { player: Player::One });
        sink.handle(&GameEvent::GameOver {
            result: TerminalResult::Draw,
        });
        assert_eq!(
            sink,
            vec![
                GameEvent::TurnChanged { player: Player::One },
                GameEvent::GameOver {
                    result: TerminalResult::Draw
                },
            ]
        );
    }

    #[test]
    fn test_channel_sink_forwards() {
        let (tx, rx) = mpsc::channel();
        let mut sink = tx;
        sink.handle(&GameEvent::TurnChanged { player: Player::Two });
        assert_eq!(
            rx.try_recv().unwrap(),
            GameEvent::TurnChanged { player: Player::Two }
        );
    }

    fn emit_turn<S: PresentationSink>(mut sink: S) {
        sink.handle(&GameEvent::TurnChanged { player: Player::One });
    }

    #[test]
    fn test_borrowed_sink() {
        let mut events: Vec<GameEvent> = Vec::new();
        emit_turn(&mut events);
        emit_turn(&mut events);
        assert_eq!(events.len(), 2);
    }
}
