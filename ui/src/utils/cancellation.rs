//! Cooperative cancellation for in-flight loads.

use std::cell::Cell;
use std::rc::Rc;

/// Single-threaded cancellation flag shared between a mounted component
/// and the loads it has in flight.
///
/// Clones observe the same flag. The token is checked at resolution time;
/// it does not abort a future that is already running.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
