//! Game configuration - grid size, motion speed and spawn policy
//!
//! All engine entry points take a `GameConfig` instead of reading globals, so
//! tests can run the same resolver on a 3x3 or 5x5 grid.

use thiserror::Error;

use crate::types::{
    CELL_SIZE, FOUR_CHANCE, FPS, GRID_COLS, GRID_ROWS, MAX_DIM, MOVE_VEL, WIN_VALUE,
};

/// Immutable engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Cell size in position units
    pub cell_size: i32,
    /// Distance a tile slides per frame, in position units
    pub step: i32,
    pub fps: u32,
    /// Probability that a mid-game spawn is a 4
    pub four_chance: f64,
    pub win_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cell_size: CELL_SIZE,
            step: MOVE_VEL,
            fps: FPS,
            four_chance: FOUR_CHANCE,
            win_value: WIN_VALUE,
        }
    }
}

impl GameConfig {
    /// Default configuration with a different grid size
    pub fn with_grid(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// - `TUI2048_FPS`: frame rate (default 60)
    /// - `TUI2048_STEP`: per-frame tile velocity in position units (default 20)
    /// - `TUI2048_FOUR_CHANCE`: probability of spawning a 4 (default 0.1)
    ///
    /// Unparsable values fall back to the defaults; call [`GameConfig::validate`]
    /// on the result before use.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let fps = env::var("TUI2048_FPS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.fps);

        let step = env::var("TUI2048_STEP")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.step);

        let four_chance = env::var("TUI2048_FOUR_CHANCE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.four_chance);

        Self {
            fps,
            step,
            four_chance,
            ..defaults
        }
    }

    /// Check every invariant the resolver and spawner rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, len) in [("rows", self.rows), ("cols", self.cols)] {
            if !(2..=MAX_DIM).contains(&len) {
                return Err(ConfigError::GridSize { axis, len });
            }
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        // Tiles must land exactly on cell boundaries.
        if self.step <= 0 || self.step > self.cell_size || self.cell_size % self.step != 0 {
            return Err(ConfigError::Step {
                step: self.step,
                cell_size: self.cell_size,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::FrameRate);
        }
        if !(0.0..=1.0).contains(&self.four_chance) {
            return Err(ConfigError::FourChance(self.four_chance));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::WinValue(self.win_value));
        }
        Ok(())
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Frames a tile needs to cross one cell
    pub fn frames_per_cell(&self) -> u32 {
        (self.cell_size / self.step) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid {axis} must be between 2 and {max}, got {len}", max = MAX_DIM)]
    GridSize { axis: &'static str, len: u8 },
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),
    #[error("step {step} must be positive and divide the cell size {cell_size}")]
    Step { step: i32, cell_size: i32 },
    #[error("frame rate must be positive")]
    FrameRate,
    #[error("four chance must be within [0, 1], got {0}")]
    FourChance(f64),
    #[error("win value must be a power of two of at least 4, got {0}")]
    WinValue(u32),
    #[error(
        "board is {rows}x{cols} with cell size {cell_size}, \
         config expects {want_rows}x{want_cols} with cell size {want_cell_size}"
    )]
    BoardMismatch {
        rows: u8,
        cols: u8,
        cell_size: i32,
        want_rows: u8,
        want_cols: u8,
        want_cell_size: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_count(), 16);
        assert_eq!(config.frames_per_cell(), 10);
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(matches!(
            GameConfig::with_grid(1, 4).validate(),
            Err(ConfigError::GridSize { axis: "rows", len: 1 })
        ));
        assert!(matches!(
            GameConfig::with_grid(4, MAX_DIM + 1).validate(),
            Err(ConfigError::GridSize { axis: "cols", .. })
        ));
        assert_eq!(GameConfig::with_grid(3, 5).validate(), Ok(()));
    }

    #[test]
    fn rejects_step_that_misses_cell_boundaries() {
        let config = GameConfig {
            step: 30,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Step {
                step: 30,
                cell_size: 200
            })
        );

        let config = GameConfig {
            step: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            step: 200,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_spawn_policy_and_win_value() {
        let config = GameConfig {
            four_chance: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FourChance(1.5)));

        let config = GameConfig {
            win_value: 100,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WinValue(100)));

        let config = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FrameRate));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::GridSize { axis: "rows", len: 9 };
        assert_eq!(err.to_string(), "grid rows must be between 2 and 8, got 9");
    }
}
