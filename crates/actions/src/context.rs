//! Per-tick context handed down the composition tree.

use std::time::Instant;

/// Snapshot of the current control-loop cycle.
///
/// The scheduler builds one `TickContext` at the top of each tick and hands
/// the same value to every node it advances. Wall-clock combinators measure
/// elapsed time against [`now`](TickContext::now) instead of assuming a fixed
/// period, so behavior stays correct when the host's cycle interval varies.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    index: u64,
    now: Instant,
}

impl TickContext {
    /// Creates a context for tick `index`, stamped with the current time.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            now: Instant::now(),
        }
    }

    /// Creates a context with an explicit timestamp.
    ///
    /// Intended for tests that simulate the passage of wall-clock time
    /// without sleeping.
    pub fn at(index: u64, now: Instant) -> Self {
        Self { index, now }
    }

    /// Monotonically increasing tick counter, one per scheduler tick.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Timestamp captured once at the top of this tick.
    #[inline]
    pub fn now(&self) -> Instant {
        self.now
    }
}
