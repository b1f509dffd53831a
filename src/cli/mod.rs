//! Command-line interface for the grid games.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;
pub mod console;

pub use args::GridGame;
