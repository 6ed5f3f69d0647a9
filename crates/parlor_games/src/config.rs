//! Session configuration loaded from TOML and the command line.

use crate::cli::TicTacToeArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_tictactoe::{Side, human_marker};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player name; prompted for when absent.
    player_name: Option<String>,

    /// Player marker; prompted for when absent.
    #[getter(copy)]
    human_marker: Option<char>,

    /// Who opens each round.
    #[getter(copy)]
    first_player: Side,

    /// Seed for the computer's name, marker, and move tie-breaks.
    #[getter(copy)]
    seed: Option<u64>,

    /// Pause after each round result, in milliseconds.
    #[getter(copy)]
    round_pause_ms: u64,

    /// Clear the terminal before redrawing the board.
    #[getter(copy)]
    clear_screen: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            human_marker: None,
            first_player: Side::Human,
            seed: None,
            round_pause_ms: 2000,
            clear_screen: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, then layers command-line overrides on top.
    #[instrument(skip(args), fields(config_path = %args.config.display()))]
    pub fn load(args: &TicTacToeArgs) -> Result<Self, ConfigError> {
        let mut config = if args.config.exists() {
            Self::from_file(&args.config)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };

        if let Some(name) = &args.name {
            config.player_name = Some(name.clone());
        }
        if let Some(marker) = args.marker {
            config.human_marker = Some(marker);
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if args.computer_first {
            config.first_player = Side::Computer;
        }
        if args.no_clear {
            config.clear_screen = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(symbol) = self.human_marker {
            human_marker(&symbol.to_string())
                .map_err(|e| ConfigError::new(format!("Invalid human_marker: {}", e)))?;
        }
        if let Some(name) = &self.player_name
            && name.trim().is_empty()
        {
            return Err(ConfigError::new("player_name must not be blank".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
