//! Decorator combinators.
//!
//! Decorators wrap inner actions and change how they start, restart, or hand
//! over: [`Repeat`] and [`Retry`] re-instantiate a child from a factory,
//! [`Dynamic`] defers instantiation to start time, and [`Failover`] switches
//! to a fallback when an external trigger trips.

use std::cell::Cell;
use std::rc::Rc;

use crate::{Action, Status, TickContext};

/// Factory producing a fresh child instance for each iteration.
///
/// A completed or interrupted action is never reused, so restarting always
/// goes through the factory.
pub type Factory = Box<dyn FnMut() -> Box<dyn Action>>;

enum RepeatBound {
    Times(u64),
    Until(Box<dyn FnMut() -> bool>),
    Forever,
}

/// Restarts a fresh child instance each time the previous one completes.
///
/// # Semantics
///
/// - The bound is checked before each start, including the first:
///   [`Repeat::times`] with 0 and [`Repeat::until`] with an already-true
///   predicate complete on the first tick without starting a child
/// - A completed child is replaced by a fresh instance first ticked on the
///   following tick
/// - [`Repeat::forever`] never completes on its own; it ends only by
///   interruption
pub struct Repeat {
    factory: Factory,
    bound: RepeatBound,
    completed: u64,
    current: Option<Box<dyn Action>>,
}

impl Repeat {
    /// Repeats the child a fixed number of times.
    pub fn times(times: u64, factory: impl FnMut() -> Box<dyn Action> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            bound: RepeatBound::Times(times),
            completed: 0,
            current: None,
        }
    }

    /// Repeats until the predicate returns true.
    pub fn until(
        predicate: impl FnMut() -> bool + 'static,
        factory: impl FnMut() -> Box<dyn Action> + 'static,
    ) -> Self {
        Self {
            factory: Box::new(factory),
            bound: RepeatBound::Until(Box::new(predicate)),
            completed: 0,
            current: None,
        }
    }

    /// Repeats without bound.
    pub fn forever(factory: impl FnMut() -> Box<dyn Action> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            bound: RepeatBound::Forever,
            completed: 0,
            current: None,
        }
    }

    fn exhausted(&mut self) -> bool {
        match &mut self.bound {
            RepeatBound::Times(times) => self.completed >= *times,
            RepeatBound::Until(predicate) => predicate(),
            RepeatBound::Forever => false,
        }
    }
}

impl Action for Repeat {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if self.current.is_none() {
            if self.exhausted() {
                return Status::Done;
            }
            self.current = Some((self.factory)());
        }

        let finished = self
            .current
            .as_mut()
            .is_some_and(|child| child.run(ctx).is_done());

        if finished {
            self.completed += 1;
            self.current = None;
            if self.exhausted() {
                return Status::Done;
            }
            // The next instance first runs on the following tick.
        }

        Status::Running
    }

    fn interrupt(&mut self) {
        if let Some(child) = self.current.as_mut() {
            child.interrupt();
        }
    }
}

/// Retries a child built from a factory until a success predicate passes or
/// the attempt budget runs out.
///
/// Useful for operations that may need re-running, such as vision alignment
/// or precise mechanism movement. When the child completes, the success
/// predicate decides whether to finish or start a fresh attempt; the engine
/// itself has no notion of failure, so the predicate is the caller's signal.
/// At most `max_retries` additional attempts follow the first.
pub struct Retry {
    factory: Factory,
    succeeded: Box<dyn FnMut() -> bool>,
    max_retries: u32,
    retries_used: u32,
    current: Option<Box<dyn Action>>,
}

impl Retry {
    /// Creates a retrying wrapper around the factory's action.
    pub fn new(
        factory: impl FnMut() -> Box<dyn Action> + 'static,
        succeeded: impl FnMut() -> bool + 'static,
        max_retries: u32,
    ) -> Self {
        Self {
            factory: Box::new(factory),
            succeeded: Box::new(succeeded),
            max_retries,
            retries_used: 0,
            current: None,
        }
    }
}

impl Action for Retry {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if self.current.is_none() {
            self.current = Some((self.factory)());
        }

        let finished = self
            .current
            .as_mut()
            .is_some_and(|child| child.run(ctx).is_done());

        if finished {
            self.current = None;
            if (self.succeeded)() || self.retries_used >= self.max_retries {
                return Status::Done;
            }
            self.retries_used += 1;
            // The next attempt starts on the following tick.
        }

        Status::Running
    }

    fn interrupt(&mut self) {
        if let Some(child) = self.current.as_mut() {
            child.interrupt();
        }
    }
}

/// Resolves its inner action from a supplier on the first tick, so the
/// freshest instance is picked up at start time rather than at tree
/// construction.
pub struct Dynamic<S> {
    supplier: S,
    current: Option<Box<dyn Action>>,
}

impl<S: FnMut() -> Box<dyn Action>> Dynamic<S> {
    /// Creates a late-bound action from the supplier.
    pub fn new(supplier: S) -> Self {
        Self {
            supplier,
            current: None,
        }
    }
}

impl<S: FnMut() -> Box<dyn Action>> Action for Dynamic<S> {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if self.current.is_none() {
            self.current = Some((self.supplier)());
        }
        match self.current.as_mut() {
            Some(child) => child.run(ctx),
            None => Status::Done,
        }
    }

    fn interrupt(&mut self) {
        if let Some(child) = self.current.as_mut() {
            child.interrupt();
        }
    }
}

/// Cheap clonable handle that switches a [`Failover`] to its fallback.
///
/// Tripping is one-way and idempotent.
#[derive(Clone, Default)]
pub struct FailoverTrigger {
    tripped: Rc<Cell<bool>>,
}

impl FailoverTrigger {
    /// Creates an untripped trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the trigger.
    pub fn trip(&self) {
        self.tripped.set(true);
    }

    /// Returns `true` once tripped.
    pub fn is_tripped(&self) -> bool {
        self.tripped.get()
    }
}

/// Runs a primary action until an external trigger trips, after which every
/// subsequent tick goes to the fallback instead.
///
/// On the tick the trip is first observed, the primary (if it had started)
/// receives its one `interrupt` and the fallback begins on that same tick.
/// If the primary completes before the trip, the node completes with it and
/// the fallback is never started.
pub struct Failover {
    primary: Box<dyn Action>,
    fallback: Box<dyn Action>,
    trigger: FailoverTrigger,
    primary_started: bool,
    switched: bool,
}

impl Failover {
    /// Creates a failover pair controlled by the returned trigger.
    pub fn new(primary: Box<dyn Action>, fallback: Box<dyn Action>) -> (Self, FailoverTrigger) {
        let trigger = FailoverTrigger::new();
        (
            Self {
                primary,
                fallback,
                trigger: trigger.clone(),
                primary_started: false,
                switched: false,
            },
            trigger,
        )
    }
}

impl Action for Failover {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if !self.switched && self.trigger.is_tripped() {
            if self.primary_started {
                self.primary.interrupt();
            }
            self.switched = true;
        }

        if self.switched {
            self.fallback.run(ctx)
        } else {
            self.primary_started = true;
            self.primary.run(ctx)
        }
    }

    fn interrupt(&mut self) {
        if self.switched {
            self.fallback.interrupt();
        } else if self.primary_started {
            self.primary.interrupt();
        }
    }
}
