//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and throws away
//! input that piled up while a move was animating, since moves block the
//! event loop until they settle.

pub mod map;
pub mod pending;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use pending::{discard_pending, drain_with, Drained};
