//! Per-user serialization of attendance mutations.
//!
//! Clock-in and clock-out read the most recent record and then write. Holding
//! the user's lock across both steps makes that read-then-write atomic per
//! user without relying on repository transactions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Idle entries are pruned once the registry grows past this size.
const PRUNE_THRESHOLD: usize = 1024;

/// A registry of async locks keyed by user id.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<u64, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and returns exclusive access for `user_id`.
    pub async fn acquire(&self, user_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            if locks.len() > PRUNE_THRESHOLD {
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            Arc::clone(locks.entry(user_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Returns the number of users with a registered lock.
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if no lock has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
