//! Core action trait.
//!
//! This module defines the [`Action`] trait, the fundamental abstraction for
//! every node in a composition tree. Compositions implement the same trait as
//! the leaves they contain, which is what allows arbitrary nesting depth.

use crate::{Status, TickContext};

/// A non-blocking, per-tick-bounded unit of behavior.
///
/// The engine is single-threaded and cooperative: "suspending" means
/// returning [`Status::Running`] from this tick and keeping internal progress
/// in fields for the next call. No `Send`/`Sync` bound is imposed — leaf
/// actions routinely capture `Rc`-shared hardware handles.
pub trait Action {
    /// Advances the action by at most one bounded unit of work.
    ///
    /// Must not block, sleep, or spin-wait: the host calls this once per
    /// control cycle (typically 10–100 Hz) and every call must return within
    /// the cycle. Side effects (hardware writes) are direct and immediate.
    ///
    /// Callers guarantee `run` is never invoked again after it reports
    /// [`Status::Done`] or after [`interrupt`](Action::interrupt) fired.
    fn run(&mut self, ctx: &TickContext) -> Status;

    /// One-time cleanup when the action is abandoned before completion.
    ///
    /// Invoked at most once, and only if the action never reported
    /// [`Status::Done`] — by scheduler cancellation or by losing a race.
    /// Natural completion never triggers it. Typical implementations release
    /// actuators to a safe state. The default does nothing.
    fn interrupt(&mut self) {}
}

/// Blanket implementation for boxed actions.
///
/// This allows `Box<dyn Action>` to also implement `Action`, enabling
/// dynamic dispatch and heterogeneous child lists.
impl Action for Box<dyn Action> {
    #[inline]
    fn run(&mut self, ctx: &TickContext) -> Status {
        (**self).run(ctx)
    }

    #[inline]
    fn interrupt(&mut self) {
        (**self).interrupt()
    }
}
