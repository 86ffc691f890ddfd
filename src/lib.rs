//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_2048::{core,input,term,types}`.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
