//! Idle screen lock timer

use std::time::Duration;
use tokio::time::Instant;

/// Tracks user activity and tells when the screen should lock
#[derive(Clone, Copy, Debug)]
pub struct IdleLock {
    last_activity: Instant,
}

impl IdleLock {
    pub fn new(now: Instant) -> Self {
        IdleLock { last_activity: now }
    }

    /// Record user activity
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// When the lock fires. `None` when `timeout` is zero (auto-lock off)
    /// or too large to represent.
    pub fn deadline(&self, timeout: Duration) -> Option<Instant> {
        if timeout.is_zero() {
            None
        } else {
            self.last_activity.checked_add(timeout)
        }
    }

    pub fn is_expired(&self, timeout: Duration, now: Instant) -> bool {
        self.deadline(timeout).is_some_and(|deadline| now >= deadline)
    }
}
