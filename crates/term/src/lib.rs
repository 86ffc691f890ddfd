//! Terminal rendering for the 2048 board.
//!
//! Renders into a plain framebuffer instead of a widget toolkit, then flushes
//! only the changed cells. That keeps per-frame output small enough for
//! smooth 60 FPS slides over SSH.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: tile colours
//! - [`game_view`]: snapshot to framebuffer (pure, testable)
//! - [`renderer`]: framebuffer to terminal
//! - [`frame_clock`]: frame pacing

pub mod fb;
pub mod frame_clock;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_clock::FrameClock;
pub use game_view::{AnchorY, BoardRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
