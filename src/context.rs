//! Cancellation context
//!
//! Carries a cancel flag and an optional deadline into connection calls.
//! Both are checked once, at entry; a running operation is never
//! interrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Result, SqlKvError};

/// Cancellation and deadline signal
///
/// Clones share the cancel flag: cancelling one cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// A context that expires `timeout` from now
    ///
    /// A timeout too large to represent as an `Instant` means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// `Ok` while the context is live
    ///
    /// Cancellation is reported ahead of an expired deadline.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(SqlKvError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(SqlKvError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
