//! Text rendering of the board.

use std::fmt::Write;
use strictly_othello::{Grid, Piece};

/// Symbol drawn for a cell.
pub fn symbol(piece: Piece) -> char {
    match piece {
        Piece::First => '●',
        Piece::Second => '○',
        Piece::Empty => '·',
    }
}

/// Renders the grid with column indices on top and row indices on the left.
pub fn render_grid(grid: &Grid) -> String {
    let width = (grid.size() - 1).to_string().len();
    let mut out = String::new();

    out.push_str(&" ".repeat(width));
    for column in 0..grid.size() {
        let _ = write!(out, " {:>width$}", column);
    }
    out.push('\n');

    for (row, cells) in grid.rows().enumerate() {
        let _ = write!(out, "{:>width$}", row);
        for &piece in cells {
            let _ = write!(out, " {:>width$}", symbol(piece));
        }
        out.push('\n');
    }
    out
}
