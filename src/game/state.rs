use std::fmt;

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for player one to place a mark.
    AwaitingHuman,
    /// Player two's move is being searched in the background.
    ComputingOpponent,
    /// The game is over until the next restart.
    Finished,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            TurnState::AwaitingHuman => "awaiting the human move",
            TurnState::ComputingOpponent => "computing the opponent move",
            TurnState::Finished => "finished",
        };
        write!(f, "{}", state)
    }
}
