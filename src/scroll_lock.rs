//! Page scroll lock.
//!
//! While any guard is held the page ignores scroll input. Guards release on
//! drop, so a modal that disappears mid-transition cannot leave the page
//! stuck, and an explicit `release` cannot be followed by a second one.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct LockState {
    holders: usize,
    acquisitions: u64,
    releases: u64,
}

/// Counters exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLockStats {
    pub acquisitions: u64,
    pub releases: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.lock();
        state.holders += 1;
        state.acquisitions += 1;
        tracing::debug!(holders = state.holders, "scroll lock acquired");
        ScrollLockGuard {
            lock: self.clone(),
            released: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.lock().holders > 0
    }

    pub fn stats(&self) -> ScrollLockStats {
        let state = self.state.lock();
        ScrollLockStats {
            acquisitions: state.acquisitions,
            releases: state.releases,
        }
    }

    fn release_one(&self) {
        let mut state = self.state.lock();
        state.holders = state.holders.saturating_sub(1);
        state.releases += 1;
        tracing::debug!(holders = state.holders, "scroll lock released");
    }
}

/// Held for as long as page scrolling must stay suppressed.
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
    released: bool,
}

impl ScrollLockGuard {
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if !self.released {
            self.released = true;
            self.lock.release_one();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}
