//! The eight compass directions used by the capture scan.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A unit step on the grid.
///
/// Rows grow downwards, so `North` decreases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    /// (-1, -1)
    NorthWest,
    /// (0, -1)
    North,
    /// (1, -1)
    NorthEast,
    /// (-1, 0)
    West,
    /// (1, 0)
    East,
    /// (-1, 1)
    SouthWest,
    /// (0, 1)
    South,
    /// (1, 1)
    SouthEast,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Returns the (Δcolumn, Δrow) vector for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}
