//! Strictly Othello CLI library - console driver for the engine
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: board size policy and seating
//! - **Console**: board rendering, keyboard player and game narration
//! - **Simulate**: batch random games with a summary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod session;
pub mod simulate;

pub use config::{AppConfig, ConfigError, SeatChoice, board_size_policy};
pub use console::{ConsoleReporter, HumanPlayer, render_grid};
pub use session::Session;
pub use simulate::{SimulationError, SimulationSummary, simulate};
