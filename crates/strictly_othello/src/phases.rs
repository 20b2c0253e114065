//! Turn states, turn records and outcomes.

use super::action::Move;
use super::types::{Coord, Side};
use serde::{Deserialize, Serialize};

/// Where the turn state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The side has at least one legal placement and must play one.
    AwaitingMove(Side),
    /// The side has no legal placement and must pass.
    Skipped(Side),
    /// No further transitions.
    Terminated,
}

/// The most recently completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// A disc was placed.
    Placed {
        /// The placement.
        mov: Move,
        /// Cells flipped by it.
        flipped: Vec<Coord>,
    },
    /// The side had no legal placement.
    Passed(Side),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Termination {
    /// Both sides passed on consecutive turns.
    #[display("neither side can move")]
    BothSidesStuck,
    /// No empty cell is left.
    #[display("the board is full")]
    BoardFull,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Side holding more discs.
    Winner(Side),
    /// Equal disc counts.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
