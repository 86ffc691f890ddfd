//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, the animated slide/merge engine and
//! the tile spawner. It has **zero dependencies** on terminals or I/O, making
//! it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every move can be resolved headless with [`NoRender`]
//! - **Portable**: Any renderer plugs in through [`RenderHook`]
//!
//! # Module Structure
//!
//! - [`board`]: grid of optional tiles keyed by [`Cell`]
//! - [`tile`]: tiles with a discrete cell and a continuous position
//! - [`direction`]: the per-direction parameter table
//! - [`motion`]: the frame-by-frame motion resolver
//! - [`spawn`]: random 2/4 tile insertion and board-full detection
//! - [`game_state`]: a complete turn (slide, spawn, status)
//! - [`config`]: grid size, velocity and spawn policy
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes in one direction.
//! - Two equal tiles that meet merge into one of double value; a tile merges
//!   at most once per move.
//! - A move that changed the board is followed by one new tile (2, or 4 with
//!   probability `four_chance`).
//! - The game is lost once the board is full and no two neighbours match.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Cell, Game, GameConfig, NoRender, Spawner};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let config = GameConfig::default();
//! let board = Board::from_rows(&config, &[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut game = Game::from_board(config, board, Spawner::seeded(1, 0.1)).unwrap();
//!
//! let outcome = game.resolve_move(Direction::Left, &mut NoRender).unwrap();
//! assert_eq!(outcome.merges, 1);
//! assert_eq!(outcome.status, GameStatus::Continue);
//! assert_eq!(game.board().get(Cell::new(0, 0)).map(|t| t.value), Some(4));
//! assert_eq!(game.board().occupied_count(), 2); // merged tile + spawn
//! ```
//!
//! # Timing
//!
//! The resolver advances tiles by `step` position units per frame and calls
//! [`RenderHook::render`] once per frame in which something moved. Pacing
//! (sleeping to the frame rate) is the hook's job, which keeps this crate free
//! of clocks.

pub mod board;
pub mod config;
pub mod direction;
pub mod game_state;
pub mod motion;
pub mod snapshot;
pub mod spawn;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use direction::{MotionParams, ProcessOrder, Rounding};
pub use game_state::{Game, MoveOutcome};
pub use motion::{settle, settle_instant, NoRender, RenderHook, Settled};
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use spawn::Spawner;
pub use tile::{Cell, Tile, TileId};
