//! Motion resolver - animated slide and merge of all tiles
//!
//! A move is simulated one frame at a time. Every frame:
//!
//! 1. Tiles are ordered so the one nearest the destination edge goes first.
//! 2. Each tile either stays (at the boundary, or flush against a blocker),
//!    advances one step, or completes a merge into an equal neighbour.
//! 3. The board is rebuilt from the surviving tiles.
//! 4. If anything changed, the frame is handed to the [`RenderHook`].
//!
//! The loop ends on the first frame where nothing moved. A tile that took part
//! in a merge is locked for the rest of the move, so `[2, 2, 2, 2]` slides to
//! `[4, 4, _, _]` rather than `[8, _, _, _]`.
//!
//! Neighbours are looked up through the board's cell map as it stood at the
//! start of the frame, with one exception: a tile that merges away vacates its
//! cell immediately. Combined with the flush rule in
//! [`MotionParams::glides_to_block`] this keeps trailing tiles in lockstep
//! with the tile ahead, so no two tiles are ever filed under the same cell.

use std::convert::Infallible;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::direction::MotionParams;
use crate::tile::{Cell, TileId};
use crate::types::{Direction, MAX_CELLS};

/// Receives every intermediate frame of an animated move
///
/// Implementations must not mutate the board; they only get a shared borrow.
pub trait RenderHook {
    type Error;

    fn render(&mut self, board: &Board) -> Result<(), Self::Error>;
}

/// Hook for headless resolution (tests, benchmarks, AI rollouts)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRender;

impl RenderHook for NoRender {
    type Error = Infallible;

    fn render(&mut self, _board: &Board) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<F, E> RenderHook for F
where
    F: FnMut(&Board) -> Result<(), E>,
{
    type Error = E;

    fn render(&mut self, board: &Board) -> Result<(), E> {
        self(board)
    }
}

/// Summary of a settled move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settled {
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Number of intermediate frames handed to the render hook
    pub frames: u32,
}

/// Slide every tile in `direction` until nothing can move
///
/// The board is left with all tiles at rest. No tile is spawned here; see
/// [`crate::Game::resolve_move`] for the full move including the spawn.
pub fn settle<H>(
    board: &mut Board,
    config: &GameConfig,
    direction: Direction,
    hook: &mut H,
) -> Result<Settled, H::Error>
where
    H: RenderHook + ?Sized,
{
    let params = MotionParams::for_direction(direction);
    let (rows, cols) = (board.rows(), board.cols());
    let cell_size = board.cell_size();
    let step = config.step;
    let delta = params.step_vector(step);
    let slot = |cell: Cell| (cell.row as usize) * (cols as usize) + (cell.col as usize);

    let mut locked: ArrayVec<TileId, MAX_CELLS> = ArrayVec::new();
    let mut settled = Settled::default();

    loop {
        let mut active = board.drain_tiles();
        active.sort_by_key(|t| params.sort_key(t));

        // Cell -> index into `active`, as of the start of this frame.
        let mut lookup: [Option<u8>; MAX_CELLS] = [None; MAX_CELLS];
        for (i, tile) in active.iter().enumerate() {
            lookup[slot(tile.cell)] = Some(i as u8);
        }
        let mut merged_away = [false; MAX_CELLS];
        let mut updated = false;

        for i in 0..active.len() {
            let tile = active[i];
            if params.at_boundary(tile.cell, rows, cols) {
                continue;
            }

            let next = params
                .neighbor(tile.cell, rows, cols)
                .and_then(|cell| lookup[slot(cell)])
                .map(|j| j as usize);

            match next {
                None => active[i].shift(delta),
                Some(j) => {
                    let other = active[j];
                    let mergeable = other.value == tile.value
                        && !locked.contains(&tile.id)
                        && !locked.contains(&other.id);

                    if mergeable {
                        if params.glides_to_merge(&tile, &other, step) {
                            active[i].shift(delta);
                        } else {
                            active[j].value *= 2;
                            locked.push(other.id);
                            merged_away[i] = true;
                            lookup[slot(tile.cell)] = None;
                            settled.merges += 1;
                        }
                    } else if params.glides_to_block(&tile, &other, step, cell_size) {
                        active[i].shift(delta);
                    } else {
                        continue;
                    }
                }
            }

            if !merged_away[i] {
                active[i].cell = params.snap(&active[i], cell_size);
            }
            updated = true;
        }

        for (i, tile) in active.iter().enumerate() {
            if merged_away[i] {
                continue;
            }
            let displaced = board.place(*tile);
            debug_assert!(
                displaced.is_none(),
                "two tiles filed under ({}, {})",
                tile.cell.row,
                tile.cell.col
            );
        }

        if !updated {
            break;
        }
        settled.changed = true;
        settled.frames += 1;
        hook.render(board)?;
    }

    debug_assert!(board.tiles().all(|t| t.is_at_rest(cell_size)));
    log::debug!(
        "settled {}: changed={} merges={} frames={}",
        direction.as_str(),
        settled.changed,
        settled.merges,
        settled.frames
    );
    Ok(settled)
}

/// Resolve a move without animation
pub fn settle_instant(board: &mut Board, config: &GameConfig, direction: Direction) -> Settled {
    match settle(board, config, direction, &mut NoRender) {
        Ok(settled) => settled,
        Err(never) => match never {},
    }
}
