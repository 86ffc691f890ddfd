//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell holds at most one tile.
//! Uses a flat row-major vector keyed by [`Cell`], never by formatted strings.
//! Coordinates: `row` grows downwards, `col` grows to the right, `(0, 0)` is
//! the top-left corner.

use arrayvec::ArrayVec;

use crate::config::{ConfigError, GameConfig};
use crate::tile::{Cell, Tile, TileId};
use crate::types::{Direction, MAX_CELLS};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cell_size: i32,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Option<Tile>>,
    next_id: u32,
}

impl Board {
    /// Create a new empty board for a validated configuration
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cell_size: config.cell_size,
            cells: vec![None; config.cell_count()],
            next_id: 0,
        })
    }

    /// Build a board from rows of values, `0` meaning empty
    ///
    /// ```
    /// use tui_2048_core::{Board, Cell, GameConfig};
    ///
    /// let board = Board::from_rows(
    ///     &GameConfig::default(),
    ///     &[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]],
    /// )
    /// .unwrap();
    /// assert_eq!(board.occupied_count(), 3);
    /// assert_eq!(board.get(Cell::new(3, 3)).map(|t| t.value), Some(4));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows` does not match the configured grid shape.
    pub fn from_rows<const C: usize>(
        config: &GameConfig,
        rows: &[[u32; C]],
    ) -> Result<Self, ConfigError> {
        let mut board = Self::new(config)?;
        assert_eq!(rows.len(), board.rows as usize, "row count mismatch");
        for (r, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), board.cols as usize, "column count mismatch");
            for (c, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.insert(Cell::new(r as u8, c as u8), value);
                }
            }
        }
        Ok(board)
    }

    /// Values by row, `0` meaning empty
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|t| t.map_or(0, |t| t.value)).collect())
            .collect()
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Whether `cell` lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell ({}, {}) out of bounds for {}x{} board",
            cell.row,
            cell.col,
            self.rows,
            self.cols
        );
        (cell.row as usize) * (self.cols as usize) + (cell.col as usize)
    }

    /// Get the tile at `cell`
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn get(&self, cell: Cell) -> Option<&Tile> {
        self.cells[self.index(cell)].as_ref()
    }

    /// Place `tile` at `cell`, snapping it to rest there
    ///
    /// Returns the tile previously filed under `cell`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, tile: Tile) -> Option<Tile> {
        let idx = self.index(cell);
        let tile = Tile::new(tile.id, tile.value, cell, self.cell_size);
        self.next_id = self.next_id.max(tile.id.0 + 1);
        self.cells[idx].replace(tile)
    }

    /// Create a new tile with a fresh id at `cell`
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn insert(&mut self, cell: Cell, value: u32) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        let idx = self.index(cell);
        self.cells[idx] = Some(Tile::new(id, value, cell, self.cell_size));
        id
    }

    /// Remove and return the tile at `cell`
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn remove(&mut self, cell: Cell) -> Option<Tile> {
        let idx = self.index(cell);
        self.cells[idx].take()
    }

    /// File a (possibly mid-slide) tile under its own `cell` without snapping it
    ///
    /// Returns the tile it displaced, which the resolver treats as an invariant
    /// violation.
    pub(crate) fn place(&mut self, tile: Tile) -> Option<Tile> {
        let idx = self.index(tile.cell);
        self.cells[idx].replace(tile)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<Cell, MAX_CELLS> {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Cell::new((i / cols) as u8, (i % cols) as u8))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Whether some direction could change the board
    ///
    /// True when there is an empty cell next to a tile or two adjacent tiles
    /// share a value.
    pub fn has_moves(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        !self.is_full() || self.has_adjacent_pair()
    }

    /// Full board with no adjacent equal tiles: nothing can ever move again
    pub fn is_stuck(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    fn has_adjacent_pair(&self) -> bool {
        self.tiles().any(|tile| {
            [Direction::Right, Direction::Down].iter().any(|&dir| {
                tile.cell
                    .offset(dir, self.rows, self.cols)
                    .and_then(|next| self.get(next))
                    .is_some_and(|next| next.value == tile.value)
            })
        })
    }

    /// Largest tile value, 0 on an empty board
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Sum of all tile values (conserved by merges)
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|t| t.value as u64).sum()
    }

    /// Remove all tiles
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Remove all tiles, returning them in row-major order
    pub(crate) fn drain_tiles(&mut self) -> ArrayVec<Tile, MAX_CELLS> {
        self.cells.iter_mut().filter_map(Option::take).collect()
    }
}
