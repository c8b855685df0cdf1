//! Leaf actions: the primitive units compositions are built from.

use std::time::Duration;

use crate::{Action, Status, TickContext};

/// Runs a one-shot closure and completes on the same, first tick.
pub struct Instant<F> {
    effect: Option<F>,
}

impl<F: FnOnce()> Instant<F> {
    /// Creates an instant action around the given effect.
    pub fn new(effect: F) -> Self {
        Self {
            effect: Some(effect),
        }
    }
}

impl<F: FnOnce()> Action for Instant<F> {
    fn run(&mut self, _ctx: &TickContext) -> Status {
        if let Some(effect) = self.effect.take() {
            effect();
        }
        Status::Done
    }
}

enum DelayBound {
    Ticks { target: u64, elapsed: u64 },
    Clock {
        duration: Duration,
        started: Option<std::time::Instant>,
    },
}

/// Completes after a fixed number of ticks or a wall-clock duration.
///
/// Both forms measure from the delay's own first tick. The wall-clock form
/// reads the timestamp from [`TickContext`] rather than assuming a fixed
/// cycle period, so it stays correct when the host's tick interval varies.
pub struct Delay {
    bound: DelayBound,
}

impl Delay {
    /// Delays for `ticks` run calls.
    ///
    /// `Delay::ticks(0)` completes on its first tick.
    pub fn ticks(ticks: u64) -> Self {
        Self {
            bound: DelayBound::Ticks {
                target: ticks,
                elapsed: 0,
            },
        }
    }

    /// Delays for a wall-clock duration measured from the first tick.
    pub fn duration(duration: Duration) -> Self {
        Self {
            bound: DelayBound::Clock {
                duration,
                started: None,
            },
        }
    }
}

impl Action for Delay {
    fn run(&mut self, ctx: &TickContext) -> Status {
        match &mut self.bound {
            DelayBound::Ticks { target, elapsed } => {
                *elapsed += 1;
                if *elapsed >= *target {
                    Status::Done
                } else {
                    Status::Running
                }
            }
            DelayBound::Clock { duration, started } => {
                let start = *started.get_or_insert(ctx.now());
                if ctx.now().duration_since(start) >= *duration {
                    Status::Done
                } else {
                    Status::Running
                }
            }
        }
    }
}

/// Reports `Running` until a predicate returns true.
///
/// The predicate is re-evaluated on every tick.
pub struct WaitUntil<P> {
    predicate: P,
}

impl<P: FnMut() -> bool> WaitUntil<P> {
    /// Creates a wait on the given condition.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P: FnMut() -> bool> Action for WaitUntil<P> {
    fn run(&mut self, _ctx: &TickContext) -> Status {
        if (self.predicate)() {
            Status::Done
        } else {
            Status::Running
        }
    }
}
