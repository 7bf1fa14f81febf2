//! Cancellation for in-flight network calls.
//!
//! An `AbortToken` is shared between the adapter and whoever wants to stop it
//! (another thread, a signal handler). Transfers poll the token from curl's
//! progress callback and abort once it is set.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort. In-flight transfers stop at their next progress tick; new
    /// transfers fail immediately until `reset` is called.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
