//! Turn sequencing for one human against the computer.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod kind;
pub mod orchestrator;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use controller::TurnController;
pub use error::{GameError, MoveRejection};
pub use event::{GameEvent, NullSink, PresentationSink};
pub use kind::GameKind;
pub use orchestrator::{Epoch, OpponentReport, Orchestrator};
pub use state::TurnState;
