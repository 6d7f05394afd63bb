//! Sources of "now".
//!
//! The state machine never samples time itself; callers pass `now` in. The
//! HTTP layer gets it from a [`Clock`] so tests can pin it.

use std::sync::RwLock;

use chrono::{Duration, Local, NaiveDateTime};

/// A source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current timezone-naive local time.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that returns a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard = now;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
