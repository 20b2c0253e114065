//! Session setup: board size, seating and selectors for one console game.

use crate::config::{AppConfig, ConfigError, SeatChoice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_othello::{EngineError, GameSetup, MoveSelector, Orchestrator, RandomSelector, Side};
use tracing::{info, instrument};

/// Display name of the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Display name of the console player.
pub const HUMAN_NAME: &str = "You";

/// Everything needed to start one game, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    size: usize,
    human: Option<Side>,
    max_attempts: usize,
    seed: Option<u64>,
}

impl Session {
    /// Resolves the board size and the human's side.
    ///
    /// A random seat is drawn from the configured seed when there is one.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let size = config.checked_board_size()?;
        let human = if *config.auto_play() {
            None
        } else {
            Some(resolve_seat(*config.human_side(), *config.seed()))
        };

        info!(size, ?human, "Session configured");
        Ok(Self {
            size,
            human,
            max_attempts: *config.max_attempts(),
            seed: *config.seed(),
        })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The human's side, or `None` when the computer plays both.
    pub fn human(&self) -> Option<Side> {
        self.human
    }

    /// Display name for whoever plays `side`.
    pub fn name(&self, side: Side) -> String {
        match self.human {
            Some(human) if human == side => HUMAN_NAME.to_string(),
            Some(_) => COMPUTER_NAME.to_string(),
            None => format!("{} ({})", COMPUTER_NAME, side),
        }
    }

    /// A fresh game on the session's board.
    pub fn setup(&self) -> Result<GameSetup, EngineError> {
        GameSetup::new(self.size)
    }

    /// Random selector for `side`, reproducible when a seed is configured.
    pub fn computer(&self, side: Side) -> RandomSelector {
        let name = self.name(side);
        match self.seed {
            Some(seed) => RandomSelector::seeded(name, seed.wrapping_add(side_offset(side))),
            None => RandomSelector::new(name),
        }
    }

    /// Seats a human built by `human` on the human's side and computers
    /// everywhere else.
    ///
    /// `human` receives the seat's display name and is not called when the
    /// session is computer-only.
    pub fn orchestrator(
        &self,
        human: impl FnOnce(String) -> Box<dyn MoveSelector>,
    ) -> Orchestrator {
        let seat = |side: Side| -> Box<dyn MoveSelector> { Box::new(self.computer(side)) };
        let (first, second) = match self.human {
            Some(Side::First) => (human(self.name(Side::First)), seat(Side::Second)),
            Some(Side::Second) => (seat(Side::First), human(self.name(Side::Second))),
            None => (seat(Side::First), seat(Side::Second)),
        };
        Orchestrator::new(first, second).with_max_attempts(self.max_attempts)
    }
}

fn side_offset(side: Side) -> u64 {
    match side {
        Side::First => 0,
        Side::Second => 1,
    }
}

/// Turns a seat choice into a concrete side.
#[instrument]
pub fn resolve_seat(choice: SeatChoice, seed: Option<u64>) -> Side {
    match choice {
        SeatChoice::First => Side::First,
        SeatChoice::Second => Side::Second,
        SeatChoice::Random => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            if rng.random_bool(0.5) {
                Side::First
            } else {
                Side::Second
            }
        }
    }
}
