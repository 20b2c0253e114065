//! Move selector trait and implementations.

mod first_legal;
mod random;

pub use first_legal::FirstLegalSelector;
pub use random::RandomSelector;

use crate::{Coord, GameInProgress, MoveError};
use derive_more::{Display, Error};
use tracing::instrument;

/// Trait for anything that can pick a cell for the side to move.
pub trait MoveSelector {
    /// Picks the next target for `game.to_move()`.
    fn select(&mut self, game: &GameInProgress) -> Result<Coord, SelectorError>;

    /// Called when the engine refuses the last selection.
    fn on_rejected(&mut self, _coord: Coord, _error: &MoveError) {}

    /// Returns the selector's display name.
    fn name(&self) -> &str;
}

/// Selector failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Selector error: {} at {}:{}", message, file, line)]
pub struct SelectorError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SelectorError {
    /// Creates a new selector error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SelectorError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
