//! Move legality queries.

use super::scan::{capture_run, would_flip};
use crate::{Coord, Direction, Grid, Piece};
use tracing::instrument;

/// Checks whether `piece` may be placed at `coord`.
///
/// Legal means: the cell is on the grid, currently empty, and at least one of
/// the eight directions brackets an opponent run. Off-grid or occupied targets
/// are simply not legal. Never mutates the grid.
#[instrument(level = "trace", skip(grid), ret)]
pub fn is_legal(grid: &Grid, coord: Coord, piece: Piece) -> bool {
    grid.contains(coord)
        && grid.at(coord).is_empty()
        && Direction::ALL
            .into_iter()
            .any(|direction| would_flip(grid, coord, direction, piece))
}

/// Every legal target for `piece`, in row-major order.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn legal_moves(grid: &Grid, piece: Piece) -> Vec<Coord> {
    grid.coords()
        .filter(|&coord| is_legal(grid, coord, piece))
        .collect()
}

/// Returns true if any empty cell is a legal target for `piece`.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn has_any_legal_move(grid: &Grid, piece: Piece) -> bool {
    grid.coords().any(|coord| is_legal(grid, coord, piece))
}

/// Cells that placing `piece` at `coord` would flip.
///
/// Empty when the placement is not legal.
pub fn flips(grid: &Grid, coord: Coord, piece: Piece) -> Vec<Coord> {
    if !grid.contains(coord) || !grid.at(coord).is_empty() {
        return Vec::new();
    }

    let mut flipped = Vec::new();
    for direction in Direction::ALL {
        if let Some(run) = capture_run(grid, coord, direction, piece) {
            let mut cursor = coord;
            for _ in 0..run {
                // The scan already walked these cells, so each step exists.
                let Some(next) = grid.step(cursor, direction) else {
                    break;
                };
                flipped.push(next);
                cursor = next;
            }
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn start(size: usize) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        grid.initialize_start_position();
        grid
    }

    fn swap_colours(grid: &Grid) -> Grid {
        let mut swapped = grid.clone();
        for coord in grid.coords() {
            let piece = grid.at(coord);
            swapped.put(coord, piece.opponent().unwrap_or(Piece::Empty));
        }
        swapped
    }

    #[test]
    fn test_opening_moves_for_first() {
        let grid = start(8);
        let moves: HashSet<_> = legal_moves(&grid, Piece::First).into_iter().collect();
        let expected: HashSet<_> = [(2, 3), (3, 2), (4, 5), (5, 4)]
            .into_iter()
            .map(|(c, r)| Coord::new(c, r))
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_each_opening_flips_one_second_disc() {
        let grid = start(8);
        for coord in legal_moves(&grid, Piece::First) {
            let flipped = flips(&grid, coord, Piece::First);
            assert_eq!(flipped.len(), 1, "{coord} should flip one disc");
            assert_eq!(grid.at(flipped[0]), Piece::Second);
        }
    }

    #[test]
    fn test_occupied_and_outside_cells_are_illegal() {
        let grid = start(8);
        assert!(!is_legal(&grid, Coord::new(3, 3), Piece::First));
        assert!(!is_legal(&grid, Coord::new(8, 3), Piece::First));
        assert!(!is_legal(&grid, Coord::new(2, 3), Piece::Empty));
    }

    #[test]
    fn test_is_legal_is_pure_and_repeatable() {
        let grid = start(6);
        let before = grid.clone();
        for coord in grid.coords() {
            let a = is_legal(&grid, coord, Piece::Second);
            let b = is_legal(&grid, coord, Piece::Second);
            assert_eq!(a, b);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_colour_swap_symmetry() {
        let mut grid = start(8);
        grid.set(Coord::new(2, 3), Piece::First).unwrap();
        grid.set(Coord::new(3, 3), Piece::First).unwrap();
        let swapped = swap_colours(&grid);

        for coord in grid.coords() {
            assert_eq!(
                is_legal(&grid, coord, Piece::First),
                is_legal(&swapped, coord, Piece::Second),
                "asymmetry at {coord}"
            );
        }
    }

    #[test]
    fn test_has_any_legal_move() {
        let grid = start(4);
        assert!(has_any_legal_move(&grid, Piece::First));
        assert!(has_any_legal_move(&grid, Piece::Second));

        let mut lonely = Grid::new(4).unwrap();
        lonely.set(Coord::new(0, 0), Piece::First).unwrap();
        assert!(!has_any_legal_move(&lonely, Piece::First));
        assert!(!has_any_legal_move(&lonely, Piece::Second));
    }

    #[test]
    fn test_flips_in_several_directions() {
        // . S F
        // S S .
        // F . F
        let mut grid = Grid::new(3).unwrap();
        grid.set(Coord::new(1, 0), Piece::Second).unwrap();
        grid.set(Coord::new(2, 0), Piece::First).unwrap();
        grid.set(Coord::new(0, 1), Piece::Second).unwrap();
        grid.set(Coord::new(1, 1), Piece::Second).unwrap();
        grid.set(Coord::new(0, 2), Piece::First).unwrap();
        grid.set(Coord::new(2, 2), Piece::First).unwrap();

        let flipped: HashSet<_> = flips(&grid, Coord::new(0, 0), Piece::First)
            .into_iter()
            .collect();
        let expected: HashSet<_> = [Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
            .into_iter()
            .collect();
        assert_eq!(flipped, expected);
    }
}
