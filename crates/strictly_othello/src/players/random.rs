//! Random selector for computer opponents and simulations.

use super::{MoveSelector, SelectorError};
use crate::{Coord, GameInProgress};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks uniformly among the currently legal cells.
///
/// Never proposes an illegal cell, so a game between two random selectors
/// always terminates.
pub struct RandomSelector {
    name: String,
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible selector.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, game: &GameInProgress) -> Result<Coord, SelectorError> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Err(SelectorError::new("No legal moves available"));
        }
        let coord = legal[self.rng.random_range(0..legal.len())];
        debug!(selector = %self.name, %coord, choices = legal.len(), "Selector chose cell");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
