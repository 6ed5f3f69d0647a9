//! Parlor Games - console front-end for the parlor tic-tac-toe engine
//!
//! # Architecture
//!
//! - **CLI**: subcommands and per-session overrides
//! - **Config**: TOML settings merged with the command line
//! - **Console**: prompts, board rendering, and the human move provider
//! - **App**: the session loop around [`parlor_tictactoe::Match`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod console;

pub use cli::{Cli, Command, TicTacToeArgs};
pub use config::{ConfigError, GameConfig};
pub use console::{Console, ConsoleHuman, INVALID_CHOICE, joinor};
