//! Strictly Othello - type-safe Othello game logic
//!
//! Pure engine for Othello (Reversi) on any square grid of at least 2×2.
//!
//! # Architecture
//!
//! - **Grid**: N×N matrix of pieces with bounds-checked access
//! - **Rules**: eight-direction capture scan, legality and capture engine
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Contracts**: preconditions, transition checks and invariants
//! - **Players**: pluggable move selectors driven by an `Orchestrator`
//!
//! # Example
//!
//! ```
//! use strictly_othello::{Coord, GameResult, GameSetup, Side};
//!
//! let GameResult::InProgress(game) = GameSetup::new(8)?.start() else {
//!     unreachable!("an 8x8 start has empty cells");
//! };
//! assert_eq!(game.to_move(), Side::First);
//! assert_eq!(game.legal_moves().len(), 4);
//!
//! let result = game.place(Coord::new(2, 3)).map_err(|rejected| rejected.into_parts().1)?;
//! assert_eq!(result.grid().occupied(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod direction;
mod error;
mod grid;
mod kani_support;
mod phases;
mod types;
mod typestate;

// Public module declarations
pub mod invariants;
pub mod orchestrator;
pub mod players;
pub mod rules;

// Crate-level exports
pub use action::{Move, MoveError};
pub use contracts::{
    CapturesAtLeastOne, Contract, FlipGain, LegalMove, MoveContract, OccupancyGrowth, SidesTurn,
    TargetInBounds, TargetIsEmpty,
};
pub use direction::Direction;
pub use error::{EngineError, IllegalReason};
pub use grid::{Grid, MIN_GRID_SIZE};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, OccupancyInvariant, OpenCellInvariant,
    OthelloInvariants, SkipFlagInvariant,
};
pub use orchestrator::{
    DEFAULT_MAX_ATTEMPTS, GameEvent, GameObserver, Orchestrator, OrchestratorError,
};
pub use phases::{Outcome, Termination, Turn, TurnState};
pub use players::{FirstLegalSelector, MoveSelector, RandomSelector, SelectorError};
pub use rules::{
    Score, apply_move, capture_run, flips, has_any_legal_move, is_legal, legal_moves, would_flip,
};
pub use types::{Coord, Piece, Side};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Rejected};
