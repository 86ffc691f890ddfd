//! Tile and cell types
//!
//! A tile has two notions of location: the discrete `cell` it is filed under
//! in the board, and a continuous `(x, y)` position used while it slides.
//! At rest `x == col * cell_size` and `y == row * cell_size`.

use crate::types::{Axis, Direction};

/// A discrete grid location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Coordinate along the given axis
    pub fn along(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }

    /// The adjacent cell one step in `direction`, if it stays inside `rows x cols`
    pub fn offset(&self, direction: Direction, rows: u8, cols: u8) -> Option<Cell> {
        let (row, col) = (self.row as i16, self.col as i16);
        let (row, col) = match direction {
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
        };
        if row < 0 || col < 0 || row >= rows as i16 || col >= cols as i16 {
            return None;
        }
        Some(Cell::new(row as u8, col as u8))
    }
}

/// Stable identity of a tile for the lifetime of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A numbered tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    /// Power of two, at least 2
    pub value: u32,
    pub cell: Cell,
    pub x: i32,
    pub y: i32,
}

impl Tile {
    /// Create a tile at rest in `cell`
    pub fn new(id: TileId, value: u32, cell: Cell, cell_size: i32) -> Self {
        Self {
            id,
            value,
            cell,
            x: cell.col as i32 * cell_size,
            y: cell.row as i32 * cell_size,
        }
    }

    /// Position along the given axis
    pub fn coord(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Row => self.y,
            Axis::Col => self.x,
        }
    }

    /// Advance by a displacement vector
    pub fn shift(&mut self, (dx, dy): (i32, i32)) {
        self.x += dx;
        self.y += dy;
    }

    /// Whether the continuous position coincides with the cell
    pub fn is_at_rest(&self, cell_size: i32) -> bool {
        self.x == self.cell.col as i32 * cell_size && self.y == self.cell.row as i32 * cell_size
    }
}
