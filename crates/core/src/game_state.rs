//! Game state module - ties the board, resolver and spawner together
//!
//! A [`Game`] owns the board and the random spawner. One call to
//! [`Game::resolve_move`] is one complete turn: the animated slide, the spawn
//! that follows an effective move, and the resulting [`GameStatus`].

use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::motion::{settle, RenderHook};
use crate::snapshot::BoardSnapshot;
use crate::spawn::Spawner;
use crate::types::{Direction, GameStatus, INITIAL_TILES};

/// What a single directional move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub status: GameStatus,
    /// Whether any tile moved or merged
    pub changed: bool,
    pub merges: u32,
    /// Animation frames rendered while settling
    pub frames: u32,
    /// Whether a new tile was spawned afterwards
    pub spawned: bool,
}

impl MoveOutcome {
    fn ignored(direction: Direction, status: GameStatus) -> Self {
        Self {
            direction,
            status,
            changed: false,
            merges: 0,
            frames: 0,
            spawned: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    board: Board,
    spawner: Spawner<R>,
    status: GameStatus,
    /// Effective moves since the last (re)start
    moves: u32,
    started: bool,
}

impl Game<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let spawner = Spawner::seeded(seed, config.four_chance);
        Self::with_spawner(config, spawner)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game around an existing spawner
    pub fn with_spawner(config: GameConfig, spawner: Spawner<R>) -> Result<Self, ConfigError> {
        let board = Board::new(&config)?;
        Ok(Self {
            config,
            board,
            spawner,
            status: GameStatus::Continue,
            moves: 0,
            started: false,
        })
    }

    /// Resume from a prepared board (tests, puzzles)
    ///
    /// The game counts as started; no initial tiles are added. The board must
    /// have the grid shape and cell size of `config`.
    pub fn from_board(
        config: GameConfig,
        board: Board,
        spawner: Spawner<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if (board.rows(), board.cols(), board.cell_size())
            != (config.rows, config.cols, config.cell_size)
        {
            return Err(ConfigError::BoardMismatch {
                rows: board.rows(),
                cols: board.cols(),
                cell_size: board.cell_size(),
                want_rows: config.rows,
                want_cols: config.cols,
                want_cell_size: config.cell_size,
            });
        }
        let status = if board.is_stuck() {
            GameStatus::Lost
        } else {
            GameStatus::Continue
        };
        Ok(Self {
            config,
            board,
            spawner,
            status,
            moves: 0,
            started: true,
        })
    }

    /// Place the initial tiles; does nothing once started
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..INITIAL_TILES {
            self.spawner.spawn_initial(&mut self.board);
        }
    }

    /// Clear the board and start over
    pub fn restart(&mut self) {
        log::info!(
            "restart after {} moves (best tile {})",
            self.moves,
            self.board.max_value()
        );
        self.board.clear();
        self.status = GameStatus::Continue;
        self.moves = 0;
        self.started = false;
        self.start();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a tile has reached the configured win value
    pub fn has_won(&self) -> bool {
        self.board.max_value() >= self.config.win_value
    }

    /// Slide the board in `direction`, animating through `hook`, then spawn
    ///
    /// A move that changes nothing spawns no tile. Once the game is lost,
    /// moves are ignored until [`Game::restart`].
    pub fn resolve_move<H>(
        &mut self,
        direction: Direction,
        hook: &mut H,
    ) -> Result<MoveOutcome, H::Error>
    where
        H: RenderHook + ?Sized,
    {
        if self.status.is_lost() {
            return Ok(MoveOutcome::ignored(direction, self.status));
        }

        let settled = settle(&mut self.board, &self.config, direction, hook)?;

        let (status, spawned) = if settled.changed {
            self.moves += 1;
            match self.spawner.spawn_random(&mut self.board) {
                GameStatus::Lost => (GameStatus::Lost, false),
                GameStatus::Continue if self.board.is_stuck() => (GameStatus::Lost, true),
                GameStatus::Continue => (GameStatus::Continue, true),
            }
        } else if self.board.is_stuck() {
            // Nothing moved and nothing can: the spawner confirms the full board.
            (self.spawner.spawn_random(&mut self.board), false)
        } else {
            (GameStatus::Continue, false)
        };

        if status.is_lost() {
            log::info!(
                "game lost after {} moves (best tile {})",
                self.moves,
                self.board.max_value()
            );
        }
        self.status = status;

        Ok(MoveOutcome {
            direction,
            status,
            changed: settled.changed,
            merges: settled.merges,
            frames: settled.frames,
            spawned,
        })
    }

    /// Snapshot for renderers
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::from(&self.board);
        snap.moves = self.moves;
        snap.lost = self.status.is_lost();
        snap.won = self.has_won();
        snap
    }
}
