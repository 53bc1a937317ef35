//! Shared cancellation flag for single-threaded tasks

use std::cell::Cell;
use std::rc::Rc;

/// Cloneable flag that, once cancelled, stays cancelled
///
/// Every clone observes the same flag, so the owner of a task can cancel it
/// while the task itself only ever checks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Create a live token
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token and all its clones
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether `cancel` was called on this token or any clone
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
