//! Skip flag invariant: the flag records an actual pass.

use super::Invariant;
use crate::{GameInProgress, Turn};

/// Invariant: `previous_skipped` is set exactly when the last turn was a pass.
pub struct SkipFlagInvariant;

impl Invariant<GameInProgress> for SkipFlagInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let last_was_pass = matches!(game.last_turn(), Some(Turn::Passed(_)));
        game.previous_skipped() == last_was_pass
    }

    fn description() -> &'static str {
        "The skip flag is set only right after a pass"
    }
}
