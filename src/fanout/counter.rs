// src/fanout/counter.rs
// =============================================================================
// A shared count of outstanding tasks, used to tell when a run is finished.
//
// Every manifest task and every probe task holds one WorkGuard for its whole
// life. Creating the guard increments the count; dropping it decrements it.
// The rules that make "count == 0" mean "everything is done":
//
// 1. The parent calls register() itself, *before* spawning the child, and
//    moves the guard into the child. The parent still holds its own guard at
//    that moment, so the count can't touch zero between the parent finishing
//    and the child starting.
// 2. All top-level tasks are registered before anybody waits for drain.
// 3. Guards decrement in Drop, so a panicking task still checks out.
//
// wait_drained() uses tokio's Notify. The Notified future is enabled before
// the count is read, so a decrement to zero that lands between our read and
// our await can't be missed.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    drained: Notify,
}

// Cheap to clone: all clones share the same count
#[derive(Debug, Clone, Default)]
pub(crate) struct WorkCounter {
    inner: Arc<Inner>,
}

impl WorkCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers one unit of work and returns the guard that completes it.
    ///
    /// Call this from the task that is about to spawn the work, never from
    /// inside the spawned task.
    #[must_use = "dropping the guard immediately completes the work"]
    pub(crate) fn register(&self) -> WorkGuard {
        self.inner.outstanding.fetch_add(1, Ordering::AcqRel);
        WorkGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of registered tasks that haven't completed yet.
    pub(crate) fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }

    /// Waits until the count is zero.
    ///
    /// Returns immediately if nothing is outstanding.
    pub(crate) async fn wait_drained(&self) {
        loop {
            let notified = self.inner.drained.notified();
            tokio::pin!(notified);
            // Register interest before looking at the count
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }

            notified.await;
        }
    }
}

// Completes one unit of work when dropped
#[derive(Debug)]
pub(crate) struct WorkGuard {
    inner: Arc<Inner>,
}

impl Drop for WorkGuard {
    fn drop(&mut self) {
        let previous = self.inner.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "work counter went negative");
        if previous == 1 {
            self.inner.drained.notify_waiters();
        }
    }
}
