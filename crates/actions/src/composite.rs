//! Composite combinators.
//!
//! Composites own an ordered list of children and advance them across ticks
//! according to their kind: [`Sequential`] (one after another), [`Parallel`]
//! (all at once, done when every child is), and [`Race`] (all at once, done
//! when the first child is).
//!
//! Children are owned exclusively, so the tree is acyclic by construction and
//! no node can be ticked from two parents.

use crate::{Action, Status, TickContext};

/// Runs children strictly in declaration order.
///
/// # Semantics
///
/// - Child *i+1* receives its first tick on the tick after child *i* reports
///   `Done`, never on the same tick
/// - The node is `Done` when the last child is
/// - An empty sequence is `Done` on its first tick without ticking anything
///
/// Interrupting the node reaches only the currently active child: earlier
/// children completed naturally and later children were never started.
pub struct Sequential {
    children: Vec<Box<dyn Action>>,
    cursor: usize,
    interrupted: bool,
}

impl Sequential {
    /// Creates a sequence over the given children.
    pub fn new(children: Vec<Box<dyn Action>>) -> Self {
        Self {
            children,
            cursor: 0,
            interrupted: false,
        }
    }
}

impl Action for Sequential {
    fn run(&mut self, ctx: &TickContext) -> Status {
        debug_assert!(!self.interrupted, "sequence ticked after interruption");

        let Some(child) = self.children.get_mut(self.cursor) else {
            return Status::Done;
        };

        if child.run(ctx).is_done() {
            // The next child first runs on the following tick.
            self.cursor += 1;
            if self.cursor == self.children.len() {
                return Status::Done;
            }
        }

        Status::Running
    }

    fn interrupt(&mut self) {
        if self.interrupted {
            return;
        }
        self.interrupted = true;

        if let Some(child) = self.children.get_mut(self.cursor) {
            child.interrupt();
        }
    }
}

/// A child of [`Parallel`] together with its completion flag.
struct Slot {
    action: Box<dyn Action>,
    done: bool,
}

/// Runs all children logically at once, completing when every child has.
///
/// # Semantics
///
/// - All children start together on the node's first tick
/// - Each still-running child is ticked exactly once per tick, in
///   declaration order; a child that reported `Done` is never re-ticked
/// - The node is `Done` when every child is; an empty group is `Done` on
///   its first tick
///
/// "Parallel" describes logical concurrency of behaviors within one tick,
/// not threads: exactly one child advances at a time.
pub struct Parallel {
    children: Vec<Slot>,
    interrupted: bool,
}

impl Parallel {
    /// Creates a parallel group over the given children.
    pub fn new(children: Vec<Box<dyn Action>>) -> Self {
        Self {
            children: children
                .into_iter()
                .map(|action| Slot {
                    action,
                    done: false,
                })
                .collect(),
            interrupted: false,
        }
    }
}

impl Action for Parallel {
    fn run(&mut self, ctx: &TickContext) -> Status {
        debug_assert!(!self.interrupted, "parallel group ticked after interruption");

        let mut all_done = true;
        for slot in &mut self.children {
            if slot.done {
                continue;
            }
            if slot.action.run(ctx).is_done() {
                slot.done = true;
            } else {
                all_done = false;
            }
        }

        if all_done { Status::Done } else { Status::Running }
    }

    fn interrupt(&mut self) {
        if self.interrupted {
            return;
        }
        self.interrupted = true;

        for slot in &mut self.children {
            if !slot.done {
                slot.action.interrupt();
            }
        }
    }
}

/// Runs all children logically at once, completing when the first child does.
///
/// # Semantics
///
/// - Children are ticked in declaration order; the first to report `Done` on
///   a tick wins and later children are not ticked on that tick
/// - Every losing child receives exactly one [`interrupt`](Action::interrupt)
///   and no further `run` calls
/// - Declaration order makes the same-tick tie-break deterministic: given the
///   same child ordering, the same winner emerges every time
pub struct Race {
    children: Vec<Box<dyn Action>>,
    settled: bool,
}

impl Race {
    /// Creates a race over the given children.
    ///
    /// An empty race is `Done` on its first tick: with no contestants there
    /// is nothing left to wait for.
    pub fn new(children: Vec<Box<dyn Action>>) -> Self {
        Self {
            children,
            settled: false,
        }
    }
}

impl Action for Race {
    fn run(&mut self, ctx: &TickContext) -> Status {
        debug_assert!(!self.settled, "race ticked after completion");

        let mut winner = None;
        for (i, child) in self.children.iter_mut().enumerate() {
            if child.run(ctx).is_done() {
                winner = Some(i);
                break;
            }
        }

        let Some(winner) = winner else {
            if self.children.is_empty() {
                self.settled = true;
                return Status::Done;
            }
            return Status::Running;
        };

        // Losers are cleaned up before the node itself reports Done. A child
        // that never got its first tick is still notified, so it can release
        // anything claimed at construction.
        for (i, child) in self.children.iter_mut().enumerate() {
            if i != winner {
                child.interrupt();
            }
        }
        self.settled = true;

        Status::Done
    }

    fn interrupt(&mut self) {
        if self.settled {
            return;
        }
        self.settled = true;

        for child in &mut self.children {
            child.interrupt();
        }
    }
}
