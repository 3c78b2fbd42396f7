// SPDX-License-Identifier: MPL-2.0
//! Scroll lock capability
//!
//! While a finger drags across a zoomed image, the surrounding page must not
//! scroll. The widget does not touch any global state itself: it receives a
//! [`ScrollLock`] and holds a [`ScrollLockGuard`] for the lifetime of the
//! touch interaction. Dropping the guard releases the lock, so a widget torn
//! down mid-drag cannot leave the page frozen.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Something that can suspend and restore scrolling.
///
/// Every `acquire` is matched by exactly one `release`.
pub trait ScrollLock: fmt::Debug + Send + Sync {
    fn acquire(&self);
    fn release(&self);
}

/// Holds an acquired [`ScrollLock`] and releases it on drop.
pub struct ScrollLockGuard {
    lock: Arc<dyn ScrollLock>,
}

impl ScrollLockGuard {
    /// Acquires `lock` and returns the guard that will release it.
    #[must_use]
    pub fn acquire(lock: Arc<dyn ScrollLock>) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("lock", &self.lock)
            .finish()
    }
}

/// Counted scroll lock shared between any number of widgets and the
/// [`ScrollGate`](crate::ui::widgets::ScrollGate) that enforces it.
///
/// Scrolling stays suspended while at least one holder is active.
#[derive(Debug, Clone, Default)]
pub struct ScrollFlag {
    holders: Arc<AtomicUsize>,
}

impl ScrollFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently suspended.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    /// Number of active holders.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }

    /// Returns this flag as a shareable [`ScrollLock`].
    #[must_use]
    pub fn as_lock(&self) -> Arc<dyn ScrollLock> {
        Arc::new(self.clone())
    }
}

impl ScrollLock for ScrollFlag {
    fn acquire(&self) {
        self.holders.fetch_add(1, Ordering::AcqRel);
    }

    fn release(&self) {
        // Saturating: an unmatched release must not wrap around.
        let _ = self
            .holders
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }
}
