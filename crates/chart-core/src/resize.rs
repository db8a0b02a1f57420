// File: crates/chart-core/src/resize.rs
// Summary: Trailing-edge debounce for resize-driven redraws.

use std::time::{Duration, Instant};

use crate::types::RESIZE_QUIET_MS;

/// Coalesces bursts of signals into one firing, `quiet` after the last signal.
///
/// Time is passed in by the caller so the event loop (and tests) own the clock.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, deadline: None }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Record a signal at `now`, resetting any pending deadline.
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// True exactly once per burst, as soon as `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(RESIZE_QUIET_MS))
    }
}
