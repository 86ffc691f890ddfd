use arrayvec::ArrayVec;

use crate::board::Board;
use crate::tile::Tile;
use crate::types::MAX_CELLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub value: u32,
    pub row: u8,
    pub col: u8,
    /// Continuous position in position units
    pub x: i32,
    pub y: i32,
}

impl From<&Tile> for TileSnapshot {
    fn from(value: &Tile) -> Self {
        Self {
            value: value.value,
            row: value.cell.row,
            col: value.cell.col,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of the board for renderers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub cell_size: i32,
    pub tiles: ArrayVec<TileSnapshot, MAX_CELLS>,
    /// Largest tile value on the board
    pub best: u32,
    pub moves: u32,
    pub lost: bool,
    pub won: bool,
}

impl BoardSnapshot {
    /// Tile filed under `(row, col)`, if any
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }
}

impl From<&Board> for BoardSnapshot {
    /// Board contents only; game-level fields are left at their defaults.
    fn from(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cell_size: board.cell_size(),
            tiles: board.tiles().map(TileSnapshot::from).collect(),
            best: board.max_value(),
            moves: 0,
            lost: false,
            won: false,
        }
    }
}
