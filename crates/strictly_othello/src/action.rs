//! First-class action types for Othello.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and can be validated before anything touches the grid.

use super::error::EngineError;
use super::types::{Coord, Side};
use serde::{Deserialize, Serialize};

/// A side placing a disc at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Target cell.
    pub coord: Coord,
}

impl Move {
    /// Returns the side making this move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the target cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.coord)
    }
}

/// Error that can occur when validating or applying a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// It's not this side's turn.
    #[display("It's not {_0}'s turn")]
    WrongSide(Side),

    /// The side asked to pass while it still has a legal move.
    #[display("{_0} has a legal move and cannot pass")]
    PassNotAllowed(Side),

    /// The grid refused the placement.
    #[display("{_0}")]
    #[from]
    Engine(EngineError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Engine(err) => Some(err),
            _ => None,
        }
    }
}
