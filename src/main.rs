//! Strictly Othello - console driver
//!
//! Human vs computer games and batch simulations.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io;
use strictly_othello::Side;
use strictly_othello_cli::cli::{Cli, Command};
use strictly_othello_cli::{
    AppConfig, ConsoleReporter, HumanPlayer, Session, board_size_policy, simulate,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            size,
            side,
            auto,
            seed,
            delay,
            no_color,
        } => {
            config.apply_overrides(size, side, auto, seed);
            config.apply_display_overrides(delay, no_color);
            run_play(&config)
        }
        Command::Simulate {
            games,
            size,
            seed,
            json,
        } => {
            config.apply_overrides(size, None, true, seed);
            run_simulate(&config, games, json)
        }
    }
}

/// Play one console game
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    let session = Session::from_config(config)?;
    let colored = *config.color() && io::stdout().is_tty();
    let reporter = ConsoleReporter::new(
        io::stdout(),
        session.name(Side::First),
        session.name(Side::Second),
    )
    .with_color(colored)
    .with_delay(config.turn_delay());
    let mut orchestrator = session
        .orchestrator(|name| {
            let human = HumanPlayer::new(name, io::stdin().lock(), io::stdout());
            Box::new(human.with_color(colored))
        })
        .with_observer(Box::new(reporter));
    let done = orchestrator.play(session.setup()?)?;

    info!(outcome = %done.outcome(), score = %done.score(), "Game finished");
    Ok(())
}

/// Run a batch of random games
#[instrument(skip(config))]
fn run_simulate(config: &AppConfig, games: usize, json: bool) -> Result<()> {
    let size = board_size_policy(*config.board_size())?;
    let summary = simulate(games, size, *config.seed())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
