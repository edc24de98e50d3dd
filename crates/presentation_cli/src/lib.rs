//! Presentation layer - Command-line interface
//!
//! Runs the reply loop against the live stream, or handles single messages
//! and places locally and prints the result as JSON.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, MessageArgs};
pub use commands::{execute, load_config};
