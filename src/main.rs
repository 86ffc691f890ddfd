//! Terminal 2048 runner (default binary).
//!
//! Input comes from crossterm; the board is drawn through the framebuffer
//! renderer. A move blocks the loop while its slide animates, one rendered
//! frame per motion step, and keys pressed meanwhile are dropped.
//!
//! Environment:
//! - `TUI2048_SEED`: RNG seed (default: derived from the clock)
//! - `TUI2048_LOG_PATH`: write logs to this file (`RUST_LOG` filters)
//! - `TUI2048_FPS`, `TUI2048_STEP`, `TUI2048_FOUR_CHANCE`: see `GameConfig::from_env`

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{Board, BoardSnapshot, Game, GameConfig};
use tui_2048::input::{discard_pending, handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, FrameClock, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid configuration")?;
    let seed = seed_from_env();
    log::info!("starting: seed={} config={:?}", seed, config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn init_logging() -> Result<()> {
    // Logging to the terminal would corrupt the alternate screen.
    let Ok(path) = std::env::var("TUI2048_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_env() -> u64 {
    std::env::var("TUI2048_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u64) -> Result<()> {
    let mut game = Game::new(config, seed)?;
    game.start();

    let view = GameView::default();
    let mut clock = FrameClock::new(config.fps);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        view.render_into(&game.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(clock.remaining())? {
            clock.tick();
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!(
                        "quit after {} moves (best tile {})",
                        game.moves(),
                        game.board().max_value()
                    );
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Restart) => game.restart(),
                    Some(action) => {
                        let Some(direction) = action.direction() else {
                            continue;
                        };
                        if game.status().is_lost() {
                            continue;
                        }

                        let moves = game.moves();
                        let win_value = config.win_value;
                        let mut animate = |board: &Board| -> Result<()> {
                            clock.tick();
                            let mut snap = BoardSnapshot::from(board);
                            snap.moves = moves;
                            snap.won = snap.best >= win_value;
                            view.render_into(&snap, viewport(), &mut fb);
                            term.draw_swap(&mut fb)
                        };
                        let outcome = game.resolve_move(direction, &mut animate)?;
                        log::debug!("{:?}", outcome);

                        let drained = discard_pending()?;
                        if drained.dropped > 0 {
                            log::debug!(
                                "dropped {} events queued during the slide",
                                drained.dropped
                            );
                        }
                        if drained.resized {
                            term.invalidate();
                        }
                    }
                    None => {}
                }
            }
            Event::Resize(w, h) => {
                log::debug!("resize to {}x{}", w, h);
                term.invalidate();
            }
            _ => {}
        }
    }
}
