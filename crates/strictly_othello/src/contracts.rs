//! Contract-based validation for Othello.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, OthelloInvariants};
use super::rules::is_legal;
use super::typestate::GameInProgress;
use super::{EngineError, IllegalReason};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.side != game.to_move() {
            Err(MoveError::WrongSide(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target lies on the grid.
pub struct TargetInBounds;

impl TargetInBounds {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        game.grid().get(mov.coord).map(|_| ()).map_err(MoveError::from)
    }
}

/// Precondition: The target cell is empty.
pub struct TargetIsEmpty;

impl TargetIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        let current = game.grid().get(mov.coord)?;
        if current.is_empty() {
            Ok(())
        } else {
            Err(EngineError::IllegalMove {
                coord: mov.coord,
                piece: mov.side.piece(),
                reason: IllegalReason::Occupied(current),
            }
            .into())
        }
    }
}

/// Precondition: The placement flips at least one opponent disc.
pub struct CapturesAtLeastOne;

impl CapturesAtLeastOne {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if is_legal(game.grid(), mov.coord, mov.side.piece()) {
            Ok(())
        } else {
            Err(EngineError::IllegalMove {
                coord: mov.coord,
                piece: mov.side.piece(),
                reason: IllegalReason::NoCapture,
            }
            .into())
        }
    }
}

/// Composite precondition: right side, on the grid, empty target, captures.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SidesTurn::check(mov, game)?;
        TargetInBounds::check(mov, game)?;
        TargetIsEmpty::check(mov, game)?;
        CapturesAtLeastOne::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Checks
// ─────────────────────────────────────────────────────────────

/// The placing side gains its new disc plus at least one flipped disc.
pub struct FlipGain;

impl FlipGain {
    /// Returns true if the mover's count grew by two or more.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameInProgress, after: &GameInProgress) -> bool {
        let piece = before.to_move().piece();
        let gained = after.grid().count(piece) >= before.grid().count(piece) + 2;
        if !gained {
            warn!(side = %before.to_move(), "Flip gain violated");
        }
        gained
    }
}

/// Exactly one cell changes from empty to occupied per placement.
pub struct OccupancyGrowth;

impl OccupancyGrowth {
    /// Returns true if occupancy grew by exactly one.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameInProgress, after: &GameInProgress) -> bool {
        let grew = after.grid().occupied() == before.grid().occupied() + 1;
        if !grew {
            warn!(
                before = before.grid().occupied(),
                after = after.grid().occupied(),
                "Occupancy growth violated"
            );
        }
        grew
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Must be the side's turn
/// - Target on the grid and empty
/// - At least one disc flipped
///
/// Postconditions:
/// - Mover gains at least two discs
/// - Exactly one more occupied cell
/// - All in-progress invariants hold
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if !FlipGain::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: mover gained fewer than two discs".to_string(),
            ));
        }
        if !OccupancyGrowth::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: occupied cells did not grow by one".to_string(),
            ));
        }

        OthelloInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameResult, GameSetup, Piece, Side};

    fn opening() -> GameInProgress {
        match GameSetup::new(8).unwrap().start() {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => panic!("8x8 start cannot be finished"),
        }
    }

    #[test]
    fn test_precondition_legal_opening() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(3, 2));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_side() {
        let game = opening();
        let action = Move::new(Side::Second, Coord::new(3, 2));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongSide(Side::Second))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(8, 0));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::Engine(EngineError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(4, 4));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::Engine(EngineError::IllegalMove {
                reason: IllegalReason::Occupied(Piece::Second),
                ..
            }))
        ));
    }

    #[test]
    fn test_precondition_no_capture() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(2, 2));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::Engine(EngineError::IllegalMove {
                reason: IllegalReason::NoCapture,
                ..
            }))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(5, 4));

        if let Ok(GameResult::InProgress(after)) = game.clone().make_move(action) {
            assert!(MoveContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = opening();
        let action = Move::new(Side::First, Coord::new(5, 4));

        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) {
            // Undo the flip behind the engine's back
            after.grid.set(Coord::new(4, 4), Piece::Second).unwrap();
            assert!(MoveContract::post(&game, &after).is_err());
        } else {
            panic!("Expected in-progress game");
        }
    }
}
