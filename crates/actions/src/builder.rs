//! Shorthand constructors for ergonomic composition building.
//!
//! Instead of writing verbose `Box::new(Sequential::new(vec![...]))`, you can
//! use shorter functions like `seq(vec![...])`. Every helper returns a boxed
//! [`Action`], ready to drop into a child list.

use std::time::Duration;

use crate::{
    Action, Branch, Delay, Gated, Instant, Parallel, Race, Repeat, Sequential, Status, TickContext,
    WaitUntil,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequential::new(children))`.
#[inline]
pub fn seq(children: Vec<Box<dyn Action>>) -> Box<dyn Action> {
    Box::new(Sequential::new(children))
}

/// Creates a parallel (all) node.
///
/// Shorthand for `Box::new(Parallel::new(children))`.
#[inline]
pub fn par(children: Vec<Box<dyn Action>>) -> Box<dyn Action> {
    Box::new(Parallel::new(children))
}

/// Creates a race (any) node.
///
/// Shorthand for `Box::new(Race::new(children))`.
#[inline]
pub fn race(children: Vec<Box<dyn Action>>) -> Box<dyn Action> {
    Box::new(Race::new(children))
}

/// Creates an if/else branch decided once, on the first tick.
#[inline]
pub fn branch(
    predicate: impl FnOnce() -> bool + 'static,
    on_true: Box<dyn Action>,
    on_false: Box<dyn Action>,
) -> Box<dyn Action> {
    Box::new(Branch::new(predicate, on_true, on_false))
}

/// Creates a single-arm branch that completes immediately when the predicate
/// does not hold.
#[inline]
pub fn when(
    predicate: impl FnOnce() -> bool + 'static,
    on_true: Box<dyn Action>,
) -> Box<dyn Action> {
    Box::new(Branch::when(predicate, on_true))
}

/// Creates a gate that holds its child until the predicate first latches.
#[inline]
pub fn gated(
    predicate: impl FnMut() -> bool + 'static,
    child: Box<dyn Action>,
) -> Box<dyn Action> {
    Box::new(Gated::new(predicate, child))
}

/// Creates a fixed-count repeat node.
#[inline]
pub fn repeat(
    times: u64,
    factory: impl FnMut() -> Box<dyn Action> + 'static,
) -> Box<dyn Action> {
    Box::new(Repeat::times(times, factory))
}

/// Creates a tick-counted delay.
#[inline]
pub fn wait_ticks(ticks: u64) -> Box<dyn Action> {
    Box::new(Delay::ticks(ticks))
}

/// Creates a wall-clock delay measured from its first tick.
#[inline]
pub fn wait_for(duration: Duration) -> Box<dyn Action> {
    Box::new(Delay::duration(duration))
}

/// Creates a wait on a per-tick re-evaluated condition.
#[inline]
pub fn wait_until(predicate: impl FnMut() -> bool + 'static) -> Box<dyn Action> {
    Box::new(WaitUntil::new(predicate))
}

/// Creates a one-shot action that completes on its first tick.
#[inline]
pub fn instant(effect: impl FnOnce() + 'static) -> Box<dyn Action> {
    Box::new(Instant::new(effect))
}

/// Wraps a closure as a leaf action.
///
/// The closure receives the [`TickContext`] and reports its own status,
/// which makes it the quickest way to write a custom multi-tick leaf.
#[inline]
pub fn from_fn(run: impl FnMut(&TickContext) -> Status + 'static) -> Box<dyn Action> {
    struct FromFn<F>(F);

    impl<F: FnMut(&TickContext) -> Status> Action for FromFn<F> {
        fn run(&mut self, ctx: &TickContext) -> Status {
            (self.0)(ctx)
        }
    }

    Box::new(FromFn(run))
}
