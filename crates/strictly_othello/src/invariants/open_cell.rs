//! Open cell invariant: a running game always has somewhere to play.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: an in-progress grid is never full.
///
/// Filling the last cell finishes the game immediately.
pub struct OpenCellInvariant;

impl Invariant<GameInProgress> for OpenCellInvariant {
    fn holds(game: &GameInProgress) -> bool {
        !game.grid().is_full()
    }

    fn description() -> &'static str {
        "An in-progress grid has at least one empty cell"
    }
}
