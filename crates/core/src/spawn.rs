//! Spawner - random tile insertion and board-full detection
//!
//! New tiles land on a cell chosen uniformly among the empty ones. Mid-game
//! spawns are a 4 with probability `four_chance` and a 2 otherwise; the tiles
//! placed when a game starts are always 2.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::tile::Cell;
use crate::types::GameStatus;

/// Random tile generator
#[derive(Debug, Clone)]
pub struct Spawner<R = StdRng> {
    rng: R,
    four_chance: f64,
}

impl Spawner<StdRng> {
    /// Deterministic spawner for a given seed
    pub fn seeded(seed: u64, four_chance: f64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), four_chance)
    }
}

impl<R: Rng> Spawner<R> {
    /// `four_chance` must lie within `[0, 1]` (checked by `GameConfig::validate`)
    pub fn new(rng: R, four_chance: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&four_chance));
        Self { rng, four_chance }
    }

    /// Insert one 2-or-4 tile into a random empty cell
    ///
    /// Returns [`GameStatus::Lost`] without touching the board when every cell
    /// is occupied.
    pub fn spawn_random(&mut self, board: &mut Board) -> GameStatus {
        let value = if self.rng.gen_bool(self.four_chance) { 4 } else { 2 };
        match self.spawn_value(board, value) {
            Some(_) => GameStatus::Continue,
            None => GameStatus::Lost,
        }
    }

    /// Insert a 2 into a random empty cell (game start)
    pub fn spawn_initial(&mut self, board: &mut Board) -> Option<Cell> {
        self.spawn_value(board, 2)
    }

    fn spawn_value(&mut self, board: &mut Board, value: u32) -> Option<Cell> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let cell = empty[self.rng.gen_range(0..empty.len())];
        board.insert(cell, value);
        log::debug!("spawned {} at ({}, {})", value, cell.row, cell.col);
        Some(cell)
    }
}
