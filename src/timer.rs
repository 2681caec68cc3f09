//! Deferred presenter actions.

use std::time::{Duration, Instant};

/// Items scheduled to fire after a delay. Time is supplied by the caller.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<(Instant, T)>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, item: T) {
        let deadline = now + delay;
        // Stable insert keeps equal deadlines in scheduling order.
        let position = self.entries.partition_point(|(at, _)| *at <= deadline);
        self.entries.insert(position, (deadline, item));
    }

    /// Remove and return every item due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let due = self.entries.partition_point(|(at, _)| *at <= now);
        self.entries.drain(..due).map(|(_, item)| item).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|(at, _)| *at)
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
