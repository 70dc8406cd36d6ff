//! Cooperative cancellation for in-flight loads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag telling an async task that its result is no longer wanted.
///
/// Clones observe the same flag. The owner of a load cancels the token on
/// teardown; the task checks it after every suspension point and drops its
/// result instead of applying it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
