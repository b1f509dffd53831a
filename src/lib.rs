pub mod board;
pub mod game;
pub mod input_handler;
pub mod prelude;
pub mod rules;
pub mod search;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
