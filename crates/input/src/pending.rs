//! Dropping input that arrived during a blocking move.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

/// What [`discard_pending`] found in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drained {
    /// Key, mouse and paste events thrown away.
    pub dropped: usize,
    /// Whether the terminal was resized meanwhile; the caller should redraw
    /// from scratch.
    pub resized: bool,
}

/// Drain every event already queued by the terminal.
///
/// Input is discarded; resizes are reported instead of lost.
pub fn discard_pending() -> Result<Drained> {
    drain_with(|| {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    })
}

/// Drain events from `next` until it returns `None`.
pub fn drain_with(mut next: impl FnMut() -> Result<Option<Event>>) -> Result<Drained> {
    let mut drained = Drained::default();
    while let Some(ev) = next()? {
        match ev {
            Event::Resize(..) => drained.resized = true,
            _ => drained.dropped += 1,
        }
    }
    Ok(drained)
}
