//! Occupancy invariant: every placement adds exactly one disc.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: occupied cells = occupied at start + placements.
///
/// Discs are flipped, never removed, so passes leave occupancy unchanged.
pub struct OccupancyInvariant;

impl Invariant<GameInProgress> for OccupancyInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.grid().occupied() == game.initial_occupied + game.placements()
    }

    fn description() -> &'static str {
        "Occupied cells equal the start position plus one per placement"
    }
}
