//! Deterministic selector for tests and replays.

use super::{MoveSelector, SelectorError};
use crate::{Coord, GameInProgress};
use tracing::debug;

/// Picks the first legal cell in row-major order.
pub struct FirstLegalSelector {
    name: String,
}

impl FirstLegalSelector {
    /// Creates a new first-legal selector.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSelector for FirstLegalSelector {
    fn select(&mut self, game: &GameInProgress) -> Result<Coord, SelectorError> {
        let coord = game
            .legal_moves()
            .first()
            .copied()
            .ok_or_else(|| SelectorError::new("No legal moves available"))?;
        debug!(selector = %self.name, %coord, "Selector chose cell");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
