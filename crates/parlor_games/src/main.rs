//! Parlor Games - Unified CLI
//!
//! Console games against a computer opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor_games::{Cli, Command, GameConfig, TicTacToeArgs, app};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::TicTacToe(args) => run_tictactoe(args),
    }
}

/// Run a console tic-tac-toe session
#[instrument(skip(args))]
fn run_tictactoe(args: TicTacToeArgs) -> Result<()> {
    let config = GameConfig::load(&args)?;

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = ?config, "Starting tic-tac-toe session");

    let stdin = std::io::stdin();
    app::run(&config, stdin.lock(), std::io::stdout())
}
