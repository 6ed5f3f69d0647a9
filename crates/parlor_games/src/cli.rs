//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor Games - turn-based console games against the computer
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Turn-based console games against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the computer, first to five rounds
    #[command(name = "tictactoe", alias = "ttt")]
    TicTacToe(TicTacToeArgs),
}

/// Options for a tic-tac-toe session. Each overrides the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TicTacToeArgs {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "parlor_games.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Your name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Your marker, one of X Y T Z G (skips the marker prompt)
    #[arg(long)]
    pub marker: Option<char>,

    /// Let the computer move first in every round
    #[arg(long)]
    pub computer_first: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,
}
