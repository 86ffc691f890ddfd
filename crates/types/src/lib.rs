//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Motion Constants
//!
//! Tile positions are tracked in abstract position units, independent of the
//! terminal cell size:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 200 | Width/height of one grid cell in position units |
//! | `MOVE_VEL` | 20 | Distance a sliding tile travels per frame |
//! | `FPS` | 60 | Animation and idle frame rate |
//!
//! A tile crossing the full board therefore takes
//! `(GRID_COLS - 1) * CELL_SIZE / MOVE_VEL` = 30 frames (half a second).
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Restart.direction(), None);
//! assert_eq!(Direction::Up.sign(), -1);
//!
//! assert_eq!(GRID_ROWS, 4);
//! assert_eq!(GRID_COLS, 4);
//! ```

/// Number of grid rows
pub const GRID_ROWS: u8 = 4;

/// Number of grid columns
pub const GRID_COLS: u8 = 4;

/// Size of one (square) cell in position units
pub const CELL_SIZE: i32 = 200;

/// Per-frame step velocity of a sliding tile, in position units
pub const MOVE_VEL: i32 = 20;

/// Frames per second for animation and idle rendering
pub const FPS: u32 = 60;

/// Tile value that counts as a win (play continues afterwards)
pub const WIN_VALUE: u32 = 2048;

/// Probability that a mid-game spawn is a 4 instead of a 2
pub const FOUR_CHANCE: f64 = 0.1;

/// Number of tiles placed on an empty board when a game starts
pub const INITIAL_TILES: usize = 2;

/// Largest supported grid dimension (rows or columns)
pub const MAX_DIM: u8 = 8;

/// Largest supported number of cells; bounds all stack-allocated tile buffers
pub const MAX_CELLS: usize = (MAX_DIM as usize) * (MAX_DIM as usize);

/// The four directions a move can slide the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Grid axis the direction moves along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Col,
            Direction::Up | Direction::Down => Axis::Row,
        }
    }

    /// -1 when travelling towards index 0, +1 otherwise
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }
}

/// Grid axis: `Row` is vertical travel (y), `Col` is horizontal travel (x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

/// Game actions produced by input and consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// The slide direction for move actions, `None` otherwise
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}

/// Result of a settled move plus spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// The game goes on
    #[default]
    Continue,
    /// The board is full and no move can change it
    Lost,
}

impl GameStatus {
    pub fn is_lost(&self) -> bool {
        matches!(self, GameStatus::Lost)
    }
}
