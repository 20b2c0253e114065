//! Errors raised by the grid and the capture engine.

use super::types::{Coord, Piece};
use derive_more::{Display, Error};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    /// The target cell already holds a disc.
    #[display("cell is occupied by {_0}")]
    Occupied(Piece),
    /// No direction brackets an opponent run.
    #[display("no opponent disc would be flipped")]
    NoCapture,
    /// An empty marker cannot be placed.
    #[display("an empty marker cannot be placed")]
    EmptyPiece,
}

/// Error raised by grid accessors and move application.
///
/// None of these leave the grid partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Grid dimension below the structural minimum, or too large to allocate.
    #[display(
        "Grid size {size} is unsupported (minimum {}, cells must fit in memory)",
        crate::grid::MIN_GRID_SIZE
    )]
    InvalidSize {
        /// The rejected dimension.
        size: usize,
    },

    /// Coordinate outside `[0, size)`.
    #[display("Cell {coord} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Grid dimension.
        size: usize,
    },

    /// Placement that is not a legal move.
    #[display("Cannot place {piece} at {coord}: {reason}")]
    IllegalMove {
        /// Target cell.
        coord: Coord,
        /// Disc being placed.
        piece: Piece,
        /// Why it was refused.
        reason: IllegalReason,
    },
}
