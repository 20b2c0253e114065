//! Formal verification of the capture rules using the Kani model checker.
//!
//! These proof harnesses check the rules for ALL grids of a small,
//! bounded size.

#[cfg(kani)]
mod proofs {
    use crate::{Coord, Grid, Piece, Side, apply_move, is_legal};

    /// A legal placement always flips, and only flips opponent discs.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_legal_move_flips_opponents() {
        let mut grid: Grid = kani::any();
        let coord: Coord = kani::any();
        let side: Side = kani::any();
        let before = grid.clone();

        kani::assume(is_legal(&grid, coord, side.piece()));

        let flipped = apply_move(&mut grid, coord, side.piece());
        assert!(flipped.is_ok(), "legal move refused");

        if let Ok(flipped) = flipped {
            assert!(!flipped.is_empty());
            for cell in flipped {
                assert_eq!(before.get(cell), Ok(side.opponent().piece()));
                assert_eq!(grid.get(cell), Ok(side.piece()));
            }
        }
    }

    /// An illegal placement leaves the grid untouched.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_illegal_move_is_inert() {
        let mut grid: Grid = kani::any();
        let coord: Coord = kani::any();
        let side: Side = kani::any();
        let before = grid.clone();

        kani::assume(!is_legal(&grid, coord, side.piece()));

        assert!(apply_move(&mut grid, coord, side.piece()).is_err());
        assert_eq!(grid, before);
    }

    /// A placement never removes a disc.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_occupancy_grows_by_one() {
        let mut grid: Grid = kani::any();
        let coord: Coord = kani::any();
        let before = grid.occupied();

        if apply_move(&mut grid, coord, Piece::First).is_ok() {
            assert_eq!(grid.occupied(), before + 1);
        }
    }
}
