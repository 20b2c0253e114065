//! Kani arbitrary implementations for Othello types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use super::{Coord, Grid, Piece, Side};

/// Dimension of grids explored by the model checker.
#[cfg(kani)]
pub(crate) const PROOF_SIZE: usize = 4;

#[cfg(kani)]
impl kani::Arbitrary for Side {
    fn any() -> Self {
        if kani::any() { Side::First } else { Side::Second }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Piece {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Piece::First,
            1 => Piece::Second,
            _ => Piece::Empty,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Coord {
    fn any() -> Self {
        let column: usize = kani::any();
        let row: usize = kani::any();
        kani::assume(column < PROOF_SIZE && row < PROOF_SIZE);
        Coord::new(column, row)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Grid {
    fn any() -> Self {
        let cells: [Piece; PROOF_SIZE * PROOF_SIZE] = kani::any();
        let mut grid = Grid::blank(PROOF_SIZE);
        for (index, piece) in cells.into_iter().enumerate() {
            grid.put(Coord::new(index % PROOF_SIZE, index / PROOF_SIZE), piece);
        }
        grid
    }
}
