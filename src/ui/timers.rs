// Pending timer fires, re-injected into the event stream when due

use crate::engine::timing::{Generation, TimerRequest};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TimerQueue {
    // Kept sorted by deadline, earliest first.
    pending: Vec<(Instant, Generation)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, request: TimerRequest) {
        let deadline = now + request.after;
        let at = self.pending.partition_point(|(d, _)| *d <= deadline);
        self.pending.insert(at, (deadline, request.tag));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// How long the runtime may block before the next fire is due.
    /// `None` when nothing is pending.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending
            .first()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    /// Removes and returns the earliest fire if it is due.
    pub fn pop_due(&mut self, now: Instant) -> Option<Generation> {
        let due = self
            .pending
            .first()
            .is_some_and(|(deadline, _)| *deadline <= now);
        due.then(|| self.pending.remove(0).1)
    }
}
