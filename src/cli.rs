//! Command-line interface for the othello binary.

use crate::config::SeatChoice;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Othello - console Othello on any even board size
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Play Othello in the terminal or simulate random games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file; command-line flags take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Board size (4 to 50; odd sizes are rounded down)
        #[arg(short, long)]
        size: Option<usize>,

        /// Side you play
        #[arg(long, value_enum)]
        side: Option<SeatChoice>,

        /// Let the computer play both sides
        #[arg(long)]
        auto: bool,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,

        /// Pause after each turn in milliseconds (default 500 with --auto, else 1000)
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Run random-vs-random games and print a summary
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Board size (4 to 50; odd sizes are rounded down)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from([
            "othello", "play", "--size", "10", "--side", "second", "--seed", "4",
        ]);
        match cli.command {
            Command::Play {
                size,
                side,
                auto,
                seed,
                delay,
                no_color,
            } => {
                assert_eq!(size, Some(10));
                assert_eq!(side, Some(SeatChoice::Second));
                assert!(!auto);
                assert_eq!(seed, Some(4));
                assert_eq!(delay, None);
                assert!(!no_color);
            }
            Command::Simulate { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_display_flags() {
        let cli = Cli::parse_from(["othello", "play", "--auto", "--delay", "0", "--no-color"]);
        assert!(matches!(
            cli.command,
            Command::Play {
                auto: true,
                delay: Some(0),
                no_color: true,
                ..
            }
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["othello", "simulate", "--json", "--config", "othello.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("othello.toml")));
        assert!(matches!(
            cli.command,
            Command::Simulate {
                games: 100,
                json: true,
                ..
            }
        ));
    }
}
