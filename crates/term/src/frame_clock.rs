//! Fixed-rate frame pacing.
//!
//! The motion resolver renders one frame per step; this clock is what turns
//! "one step" into "one sixtieth of a second". The `_at` variants take the
//! current instant explicitly so the pacing logic can be tested without
//! sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// A clock ticking `fps` times per second (`fps` of 0 is treated as 1).
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next frame is due; zero when overdue.
    ///
    /// Use as the event-poll timeout while idle.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.interval.saturating_sub(elapsed)
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    /// Sleep out the rest of the current frame and start the next one.
    pub fn tick(&mut self) {
        let wait = self.remaining();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.mark(Instant::now());
    }

    /// Start a new frame at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
