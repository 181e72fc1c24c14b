//! Autoplay cadence state.
//!
//! The scheduler only decides whether the recurring timer is armed and at
//! what interval; the timer itself is an iced subscription and the tick
//! funnels into the same advance operation manual navigation uses. It never
//! touches track state directly.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    running: bool,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
        }
    }

    /// Re-arm against the current collection size: running while there is
    /// anything to show, stopped entirely otherwise. Returns `true` when the
    /// armed state changed.
    pub fn sync(&mut self, real_len: usize) -> bool {
        let should_run = real_len > 0;
        let changed = self.running != should_run;
        self.running = should_run;
        changed
    }

    /// Change the cadence; takes effect at the next subscription rebuild.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
