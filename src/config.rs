//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_othello::DEFAULT_MAX_ATTEMPTS;
use tracing::{debug, info, instrument, warn};

/// Smallest board the driver offers.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest board the driver offers.
pub const MAX_BOARD_SIZE: usize = 50;

/// Pause after each turn when the computer plays both sides.
pub const AUTO_TURN_DELAY_MS: u64 = 500;

/// Pause after each turn when a human is playing.
pub const HUMAN_TURN_DELAY_MS: u64 = 1000;

/// Which side the human takes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SeatChoice {
    /// Human moves first.
    #[display("first")]
    First,
    /// Human moves second.
    #[display("second")]
    Second,
    /// Chosen by coin flip when the session starts.
    #[default]
    #[display("random")]
    Random,
}

/// Configuration for the console driver.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board dimension.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Side taken by the human player.
    #[serde(default)]
    human_side: SeatChoice,

    /// Let the computer play both sides.
    #[serde(default)]
    auto_play: bool,

    /// Refused selections allowed per turn.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Seed for reproducible computer play.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause after each turn in milliseconds; unset picks a default per mode.
    #[serde(default)]
    turn_delay_ms: Option<u64>,

    /// Colour warnings, prompts and the verdict on a terminal.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_board_size() -> usize {
    8
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            human_side: SeatChoice::default(),
            auto_play: false,
            max_attempts: default_max_attempts(),
            seed: None,
            turn_delay_ms: None,
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            board_size = config.board_size,
            human_side = %config.human_side,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces file values with whichever command-line values were given.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        board_size: Option<usize>,
        human_side: Option<SeatChoice>,
        auto_play: bool,
        seed: Option<u64>,
    ) {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(side) = human_side {
            self.human_side = side;
        }
        self.auto_play |= auto_play;
        if seed.is_some() {
            self.seed = seed;
        }
    }

    /// Replaces display settings with whichever command-line values were given.
    #[instrument(skip(self))]
    pub fn apply_display_overrides(&mut self, turn_delay_ms: Option<u64>, no_color: bool) {
        if turn_delay_ms.is_some() {
            self.turn_delay_ms = turn_delay_ms;
        }
        if no_color {
            self.color = false;
        }
    }

    /// Pause after each turn.
    ///
    /// Defaults to half a second in auto play and a full second otherwise.
    pub fn turn_delay(&self) -> Duration {
        let millis = self.turn_delay_ms.unwrap_or(if self.auto_play {
            AUTO_TURN_DELAY_MS
        } else {
            HUMAN_TURN_DELAY_MS
        });
        Duration::from_millis(millis)
    }

    /// Board size after applying the driver's size policy.
    pub fn checked_board_size(&self) -> Result<usize, ConfigError> {
        board_size_policy(self.board_size)
    }
}

/// Accepts sizes in `4..=50`; odd sizes are rounded down to the next even one.
#[instrument]
pub fn board_size_policy(requested: usize) -> Result<usize, ConfigError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&requested) {
        return Err(ConfigError::new(format!(
            "Board size {} is outside {}..={}",
            requested, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        )));
    }
    if requested % 2 == 1 {
        let size = requested - 1;
        warn!(requested, size, "Odd board size rounded down");
        return Ok(size);
    }
    Ok(requested)
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
