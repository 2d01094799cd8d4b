//! Cooperative cancellation for long-running algorithm loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{FieldvisError, Result};

/// A shared flag the caller raises to stop an algorithm early.
///
/// Clones share the same underlying flag, so one clone can be handed to the
/// executing algorithm while another stays with the caller.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    /// Creates a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clears a previous cancellation request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns `Err(Aborted)` once cancellation has been requested.
    pub fn check(&self) -> Result<()> {
        if self.is_aborted() {
            Err(FieldvisError::Aborted)
        } else {
            Ok(())
        }
    }
}
