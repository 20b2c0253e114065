//! Per-direction capture scan.

use crate::{Coord, Direction, Grid, Piece};

/// Length of the opponent run `piece` would capture from `origin` towards
/// `direction`.
///
/// The walk starts one step past `origin`. It returns `Some(len)` with
/// `len >= 1` when a contiguous run of opponent discs is immediately followed
/// by `piece`. It returns `None` when the walk reaches an empty cell or the
/// edge first, or when the first neighbour is already `piece`. An empty
/// `piece` never captures. The contents of `origin` itself are ignored.
pub fn capture_run(
    grid: &Grid,
    origin: Coord,
    direction: Direction,
    piece: Piece,
) -> Option<usize> {
    let opponent = piece.opponent()?;
    let mut run = 0;
    let mut cursor = origin;

    while let Some(next) = grid.step(cursor, direction) {
        let cell = grid.at(next);
        if cell == opponent {
            run += 1;
            cursor = next;
        } else if cell == piece {
            return (run > 0).then_some(run);
        } else {
            return None;
        }
    }

    None
}

/// Returns true if placing `piece` at `origin` flips at least one disc
/// towards `direction`.
pub fn would_flip(grid: &Grid, origin: Coord, direction: Direction, piece: Piece) -> bool {
    capture_run(grid, origin, direction, piece).is_some()
}
