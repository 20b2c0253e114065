//! Square grid of pieces.

use super::direction::Direction;
use super::error::EngineError;
use super::types::{Coord, Piece};
use serde::Serialize;
use tracing::{debug, instrument};

/// Smallest dimension the engine accepts.
///
/// Policy bounds such as "at least 4 and even" belong to the caller.
pub const MIN_GRID_SIZE: usize = 2;

/// N×N matrix of [`Piece`] values.
///
/// Every cell always holds exactly one piece; a new grid is all
/// [`Piece::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Piece>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    ///
    /// Fails when `size` is below [`MIN_GRID_SIZE`] or the cell count cannot
    /// be allocated.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_GRID_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        let count = size
            .checked_mul(size)
            .ok_or(EngineError::InvalidSize { size })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| EngineError::InvalidSize { size })?;
        cells.resize(count, Piece::Empty);
        Ok(Self { size, cells })
    }

    /// Builds an empty grid for a dimension already known to be valid.
    pub(crate) fn blank(size: usize) -> Self {
        debug_assert!(size >= MIN_GRID_SIZE);
        Self {
            size,
            cells: vec![Piece::Empty; size * size],
        }
    }

    /// Places the four starting discs around the centre.
    ///
    /// With `c = size / 2 - 1`, cells `(c, c)` and `(c + 1, c + 1)` take
    /// [`Piece::Second`]; `(c + 1, c)` and `(c, c + 1)` take [`Piece::First`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn initialize_start_position(&mut self) {
        let c = self.size / 2 - 1;
        self.put(Coord::new(c, c), Piece::Second);
        self.put(Coord::new(c + 1, c + 1), Piece::Second);
        self.put(Coord::new(c + 1, c), Piece::First);
        self.put(Coord::new(c, c + 1), Piece::First);
        debug!(center = c, "Start position placed");
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.column < self.size && coord.row < self.size
    }

    /// Reads a cell.
    pub fn get(&self, coord: Coord) -> Result<Piece, EngineError> {
        self.check_bounds(coord)?;
        Ok(self.at(coord))
    }

    /// Writes a cell.
    pub fn set(&mut self, coord: Coord, piece: Piece) -> Result<(), EngineError> {
        self.check_bounds(coord)?;
        self.put(coord, piece);
        Ok(())
    }

    /// Returns true if the cell holds no disc.
    pub fn is_empty(&self, coord: Coord) -> Result<bool, EngineError> {
        self.get(coord).map(Piece::is_empty)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Piece::Empty)
    }

    /// Counts cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// Counts cells holding a disc of either colour.
    pub fn occupied(&self) -> usize {
        self.cells.len() - self.count(Piece::Empty)
    }

    /// Neighbour of `coord` in `direction`, or `None` past the edge.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dc, dr) = direction.delta();
        let next = Coord::new(
            coord.column.checked_add_signed(dc)?,
            coord.row.checked_add_signed(dr)?,
        );
        self.contains(next).then_some(next)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| Coord::new(column, row)))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Piece]> {
        self.cells.chunks(self.size)
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), EngineError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// Unchecked read; callers guarantee `coord` is on the grid.
    pub(crate) fn at(&self, coord: Coord) -> Piece {
        self.cells[coord.row * self.size + coord.column]
    }

    /// Unchecked write; callers guarantee `coord` is on the grid.
    pub(crate) fn put(&mut self, coord: Coord, piece: Piece) {
        self.cells[coord.row * self.size + coord.column] = piece;
    }
}
