//! Applying a placement and flipping captured discs.

use super::legality::flips;
use crate::{Coord, EngineError, Grid, IllegalReason, Piece};
use tracing::{debug, instrument};

/// Places `piece` at `coord` and flips every captured run.
///
/// All checks run before the first write, so a rejected placement leaves the
/// grid untouched. Returns the flipped cells.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn apply_move(grid: &mut Grid, coord: Coord, piece: Piece) -> Result<Vec<Coord>, EngineError> {
    let current = grid.get(coord)?;

    let illegal = |reason| EngineError::IllegalMove { coord, piece, reason };
    if piece.is_empty() {
        return Err(illegal(IllegalReason::EmptyPiece));
    }
    if !current.is_empty() {
        return Err(illegal(IllegalReason::Occupied(current)));
    }

    let flipped = flips(grid, coord, piece);
    if flipped.is_empty() {
        return Err(illegal(IllegalReason::NoCapture));
    }

    grid.put(coord, piece);
    for &cell in &flipped {
        grid.put(cell, piece);
    }

    debug!(%coord, %piece, flipped = flipped.len(), "Move applied");
    Ok(flipped)
}
