//! Per-direction motion parameters
//!
//! One table drives all four directions, so the resolver is a single
//! parametrised algorithm:
//!
//! | direction | axis | order | step | boundary | neighbour | rounding |
//! |-----------|------|-------|------|----------|-----------|----------|
//! | left  | col | ascending  | (-v, 0) | col == 0        | (row, col-1) | ceil  |
//! | right | col | descending | (+v, 0) | col == COLS - 1 | (row, col+1) | floor |
//! | up    | row | ascending  | (0, -v) | row == 0        | (row-1, col) | ceil  |
//! | down  | row | descending | (0, +v) | row == ROWS - 1 | (row+1, col) | floor |

use crate::tile::{Cell, Tile};
use crate::types::{Axis, Direction};

/// Order in which tiles are processed along the travel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOrder {
    Ascending,
    Descending,
}

/// How a continuous coordinate is snapped back to a cell index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(&self, coord: i32, cell_size: i32) -> i32 {
        match self {
            Rounding::Floor => coord.div_euclid(cell_size),
            Rounding::Ceil => -(-coord).div_euclid(cell_size),
        }
    }
}

/// Motion parameters for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionParams {
    pub direction: Direction,
    pub axis: Axis,
    pub order: ProcessOrder,
    pub rounding: Rounding,
}

impl MotionParams {
    pub fn for_direction(direction: Direction) -> Self {
        let (order, rounding) = match direction {
            Direction::Left | Direction::Up => (ProcessOrder::Ascending, Rounding::Ceil),
            Direction::Right | Direction::Down => (ProcessOrder::Descending, Rounding::Floor),
        };
        Self {
            direction,
            axis: direction.axis(),
            order,
            rounding,
        }
    }

    /// Displacement applied to a sliding tile each frame
    pub fn step_vector(&self, step: i32) -> (i32, i32) {
        let v = step * self.direction.sign();
        match self.axis {
            Axis::Col => (v, 0),
            Axis::Row => (0, v),
        }
    }

    /// Sort key that puts the tile nearest the destination edge first
    pub fn sort_key(&self, tile: &Tile) -> i32 {
        let coord = tile.cell.along(self.axis) as i32;
        match self.order {
            ProcessOrder::Ascending => coord,
            ProcessOrder::Descending => -coord,
        }
    }

    /// Whether `cell` already touches the edge the tiles travel towards
    pub fn at_boundary(&self, cell: Cell, rows: u8, cols: u8) -> bool {
        match self.direction {
            Direction::Left => cell.col == 0,
            Direction::Right => cell.col + 1 == cols,
            Direction::Up => cell.row == 0,
            Direction::Down => cell.row + 1 == rows,
        }
    }

    /// The cell one step further in the direction of travel
    pub fn neighbor(&self, cell: Cell, rows: u8, cols: u8) -> Option<Cell> {
        cell.offset(self.direction, rows, cols)
    }

    /// Remaining distance from `tile` to `next` along the travel axis
    ///
    /// Positive while `next` lies ahead of `tile`.
    pub fn gap(&self, tile: &Tile, next: &Tile) -> i32 {
        (next.coord(self.axis) - tile.coord(self.axis)) * self.direction.sign()
    }

    /// An equal-valued tile keeps gliding while more than one step remains;
    /// otherwise the merge fires.
    pub fn glides_to_merge(&self, tile: &Tile, next: &Tile, step: i32) -> bool {
        self.gap(tile, next) > step
    }

    /// A blocked tile may advance only while it stays a full cell behind.
    pub fn glides_to_block(&self, tile: &Tile, next: &Tile, step: i32, cell_size: i32) -> bool {
        self.gap(tile, next) - step >= cell_size
    }

    /// Cell a tile belongs to after moving, given its continuous position
    pub fn snap(&self, tile: &Tile, cell_size: i32) -> Cell {
        let row = self.rounding.apply(tile.y, cell_size);
        let col = self.rounding.apply(tile.x, cell_size);
        Cell::new(row as u8, col as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileId;

    fn tile_at(x: i32, y: i32, value: u32) -> Tile {
        let mut t = Tile::new(TileId(0), value, Cell::new(0, 0), 200);
        t.x = x;
        t.y = y;
        t
    }

    #[test]
    fn table_matches_direction_semantics() {
        let left = MotionParams::for_direction(Direction::Left);
        assert_eq!(left.axis, Axis::Col);
        assert_eq!(left.order, ProcessOrder::Ascending);
        assert_eq!(left.rounding, Rounding::Ceil);
        assert_eq!(left.step_vector(20), (-20, 0));

        let right = MotionParams::for_direction(Direction::Right);
        assert_eq!(right.order, ProcessOrder::Descending);
        assert_eq!(right.rounding, Rounding::Floor);
        assert_eq!(right.step_vector(20), (20, 0));

        let up = MotionParams::for_direction(Direction::Up);
        assert_eq!(up.axis, Axis::Row);
        assert_eq!(up.step_vector(20), (0, -20));

        let down = MotionParams::for_direction(Direction::Down);
        assert_eq!(down.rounding, Rounding::Floor);
        assert_eq!(down.step_vector(20), (0, 20));
    }

    #[test]
    fn rounding_modes() {
        assert_eq!(Rounding::Ceil.apply(180, 200), 1);
        assert_eq!(Rounding::Ceil.apply(200, 200), 1);
        assert_eq!(Rounding::Ceil.apply(0, 200), 0);
        assert_eq!(Rounding::Floor.apply(220, 200), 1);
        assert_eq!(Rounding::Floor.apply(399, 200), 1);
        assert_eq!(Rounding::Floor.apply(400, 200), 2);
    }

    #[test]
    fn boundaries() {
        let right = MotionParams::for_direction(Direction::Right);
        assert!(right.at_boundary(Cell::new(2, 3), 4, 4));
        assert!(!right.at_boundary(Cell::new(2, 2), 4, 4));
        assert!(!right.at_boundary(Cell::new(2, 3), 4, 5));

        let up = MotionParams::for_direction(Direction::Up);
        assert!(up.at_boundary(Cell::new(0, 3), 4, 4));
        assert_eq!(up.neighbor(Cell::new(0, 3), 4, 4), None);
        assert_eq!(up.neighbor(Cell::new(2, 3), 4, 4), Some(Cell::new(1, 3)));
    }

    #[test]
    fn gap_thresholds() {
        let left = MotionParams::for_direction(Direction::Left);
        let next = tile_at(0, 0, 2);

        assert_eq!(left.gap(&tile_at(200, 0, 2), &next), 200);
        assert!(left.glides_to_merge(&tile_at(40, 0, 2), &next, 20));
        assert!(!left.glides_to_merge(&tile_at(20, 0, 2), &next, 20));

        assert!(left.glides_to_block(&tile_at(220, 0, 4), &next, 20, 200));
        assert!(!left.glides_to_block(&tile_at(200, 0, 4), &next, 20, 200));

        let down = MotionParams::for_direction(Direction::Down);
        let below = tile_at(0, 600, 2);
        assert_eq!(down.gap(&tile_at(0, 400, 2), &below), 200);
        assert!(!down.glides_to_block(&tile_at(0, 400, 8), &below, 20, 200));
    }

    #[test]
    fn snap_uses_direction_rounding() {
        let left = MotionParams::for_direction(Direction::Left);
        assert_eq!(left.snap(&tile_at(380, 0, 2), 200), Cell::new(0, 2));
        let right = MotionParams::for_direction(Direction::Right);
        assert_eq!(right.snap(&tile_at(380, 0, 2), 200), Cell::new(0, 1));
    }
}
