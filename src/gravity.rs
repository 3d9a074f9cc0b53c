//! Gravity driver: turns elapsed frame time into `SoftDrop` ticks.

use crate::types::FALL_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    interval_ms: u32,
    timer_ms: u32,
}

impl Gravity {
    /// `interval_ms` of zero is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            timer_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advance by `elapsed_ms`; returns how many drops are due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        let due = self.timer_ms / self.interval_ms;
        self.timer_ms %= self.interval_ms;
        due
    }

    pub fn reset(&mut self) {
        self.timer_ms = 0;
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(FALL_INTERVAL_MS)
    }
}
