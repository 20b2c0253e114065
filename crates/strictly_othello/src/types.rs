//! Core domain types for Othello.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Piece {
    /// Disc belonging to the side that moves first.
    First,
    /// Disc belonging to the side that moves second.
    Second,
    /// No disc.
    Empty,
}

impl Piece {
    /// Returns the opposing disc, or `None` for an empty cell.
    pub fn opponent(self) -> Option<Piece> {
        match self {
            Piece::First => Some(Piece::Second),
            Piece::Second => Some(Piece::First),
            Piece::Empty => None,
        }
    }

    /// Returns true if this is [`Piece::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Returns the side that owns this disc.
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::First => Some(Side::First),
            Piece::Second => Some(Side::Second),
            Piece::Empty => None,
        }
    }
}

/// One of the two players.
///
/// [`Side::First`] always opens the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Side {
    /// Moves first.
    First,
    /// Moves second.
    Second,
}

impl Side {
    /// Returns the opponent side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns the disc this side places.
    pub fn piece(self) -> Piece {
        match self {
            Side::First => Piece::First,
            Side::Second => Piece::Second,
        }
    }
}

impl From<Side> for Piece {
    fn from(side: Side) -> Self {
        side.piece()
    }
}

/// Zero-based cell address, column first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({column}, {row})")]
pub struct Coord {
    /// Column index (x).
    pub column: usize,
    /// Row index (y).
    pub row: usize,
}
