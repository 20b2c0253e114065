//! Score derivation.

use crate::{Grid, Piece, Side};
use serde::{Deserialize, Serialize};

/// Disc counts at a point in time. Derived from the grid, never stored by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Cells holding [`Piece::First`].
    pub first: usize,
    /// Cells holding [`Piece::Second`].
    pub second: usize,
    /// Cells holding [`Piece::Empty`].
    pub empty: usize,
}

impl Score {
    /// Counts every cell of `grid`.
    pub fn of(grid: &Grid) -> Self {
        Self {
            first: grid.count(Piece::First),
            second: grid.count(Piece::Second),
            empty: grid.count(Piece::Empty),
        }
    }

    /// Disc count for `side`.
    pub fn for_side(&self, side: Side) -> usize {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Side holding more discs, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "First {} - {} Second", self.first, self.second)
    }
}
