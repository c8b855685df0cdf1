//! Predicate-routed combinators.
//!
//! [`Branch`] decides between two arms exactly once, on its first tick.
//! [`Gated`] re-evaluates its predicate every tick, holding its child back
//! until the predicate first latches true. Together they cover one-shot and
//! per-tick predicate evaluation without ever starting an arm that was not
//! chosen.

use crate::{Action, Status, TickContext};

/// Two-arm conditional: evaluates a predicate once, on the first tick, and
/// runs exactly one arm to completion.
///
/// The non-chosen arm is never started and is dropped at decision time. A
/// single-arm form is available via [`Branch::when`]; with a false predicate
/// it completes on its first tick without running anything.
pub struct Branch<P> {
    predicate: Option<P>,
    on_true: Option<Box<dyn Action>>,
    on_false: Option<Box<dyn Action>>,
    decided: bool,
    chosen: Option<Box<dyn Action>>,
}

impl<P: FnOnce() -> bool> Branch<P> {
    /// Creates an if/else branch.
    pub fn new(predicate: P, on_true: Box<dyn Action>, on_false: Box<dyn Action>) -> Self {
        Self {
            predicate: Some(predicate),
            on_true: Some(on_true),
            on_false: Some(on_false),
            decided: false,
            chosen: None,
        }
    }

    /// Creates a branch that runs `on_true` only if the predicate holds,
    /// and otherwise completes immediately.
    pub fn when(predicate: P, on_true: Box<dyn Action>) -> Self {
        Self {
            predicate: Some(predicate),
            on_true: Some(on_true),
            on_false: None,
            decided: false,
            chosen: None,
        }
    }
}

impl<P: FnOnce() -> bool> Action for Branch<P> {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if !self.decided {
            self.decided = true;
            if let Some(predicate) = self.predicate.take() {
                self.chosen = if predicate() {
                    self.on_true.take()
                } else {
                    self.on_false.take()
                };
            }
            // Whatever was not chosen is discarded here.
            self.on_true = None;
            self.on_false = None;
        }

        match self.chosen.as_mut() {
            Some(arm) => arm.run(ctx),
            None => Status::Done,
        }
    }

    fn interrupt(&mut self) {
        // Only a started arm needs cleanup; an undecided branch has started
        // nothing.
        if let Some(arm) = self.chosen.as_mut() {
            arm.interrupt();
        }
    }
}

/// Holds its child back until a predicate first returns true.
///
/// The predicate is re-evaluated every tick while the gate is closed and the
/// child is not started during that time. Once the predicate latches true the
/// child runs to completion and the predicate is never consulted again.
pub struct Gated<P> {
    predicate: P,
    child: Box<dyn Action>,
    open: bool,
}

impl<P: FnMut() -> bool> Gated<P> {
    /// Creates a gate in front of `child`.
    pub fn new(predicate: P, child: Box<dyn Action>) -> Self {
        Self {
            predicate,
            child,
            open: false,
        }
    }
}

impl<P: FnMut() -> bool> Action for Gated<P> {
    fn run(&mut self, ctx: &TickContext) -> Status {
        if !self.open {
            self.open = (self.predicate)();
            if !self.open {
                return Status::Running;
            }
        }

        self.child.run(ctx)
    }

    fn interrupt(&mut self) {
        // A closed gate never started its child.
        if self.open {
            self.child.interrupt();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Counted {
        runs: Rc<Cell<u32>>,
        interrupts: Rc<Cell<u32>>,
        done_after: u32,
    }

    impl Counted {
        fn new(done_after: u32) -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>) {
            let runs = Rc::new(Cell::new(0));
            let interrupts = Rc::new(Cell::new(0));
            (
                Self {
                    runs: Rc::clone(&runs),
                    interrupts: Rc::clone(&interrupts),
                    done_after,
                },
                runs,
                interrupts,
            )
        }
    }

    impl Action for Counted {
        fn run(&mut self, _ctx: &TickContext) -> Status {
            self.runs.set(self.runs.get() + 1);
            if self.runs.get() >= self.done_after {
                Status::Done
            } else {
                Status::Running
            }
        }

        fn interrupt(&mut self) {
            self.interrupts.set(self.interrupts.get() + 1);
        }
    }

    fn ctx(index: u64) -> TickContext {
        TickContext::new(index)
    }

    #[test]
    fn branch_routes_to_true_arm() {
        let (yes, yes_runs, _) = Counted::new(2);
        let (no, no_runs, _) = Counted::new(1);
        let mut branch = Branch::new(|| true, Box::new(yes), Box::new(no));

        assert_eq!(branch.run(&ctx(0)), Status::Running);
        assert_eq!(branch.run(&ctx(1)), Status::Done);
        assert_eq!(yes_runs.get(), 2);
        assert_eq!(no_runs.get(), 0);
    }

    #[test]
    fn branch_routes_to_false_arm() {
        let (yes, yes_runs, _) = Counted::new(1);
        let (no, no_runs, _) = Counted::new(1);
        let mut branch = Branch::new(|| false, Box::new(yes), Box::new(no));

        assert_eq!(branch.run(&ctx(0)), Status::Done);
        assert_eq!(yes_runs.get(), 0);
        assert_eq!(no_runs.get(), 1);
    }

    #[test]
    fn branch_evaluates_predicate_once() {
        let evals = Rc::new(Cell::new(0));
        let probe = Rc::clone(&evals);
        let (arm, _, _) = Counted::new(3);
        let mut branch = Branch::when(
            move || {
                probe.set(probe.get() + 1);
                true
            },
            Box::new(arm),
        );

        for i in 0..3 {
            branch.run(&ctx(i));
        }
        assert_eq!(evals.get(), 1);
    }

    #[test]
    fn when_with_false_predicate_is_done_immediately() {
        let (arm, arm_runs, _) = Counted::new(1);
        let mut branch = Branch::when(|| false, Box::new(arm));

        assert_eq!(branch.run(&ctx(0)), Status::Done);
        assert_eq!(arm_runs.get(), 0);
    }

    #[test]
    fn branch_interrupt_reaches_started_arm_only() {
        let (yes, _, yes_interrupts) = Counted::new(5);
        let (no, _, no_interrupts) = Counted::new(5);
        let mut branch = Branch::new(|| true, Box::new(yes), Box::new(no));

        branch.run(&ctx(0));
        branch.interrupt();
        assert_eq!(yes_interrupts.get(), 1);
        assert_eq!(no_interrupts.get(), 0);
    }

    #[test]
    fn undecided_branch_interrupt_is_a_no_op() {
        let (yes, _, yes_interrupts) = Counted::new(5);
        let (no, _, no_interrupts) = Counted::new(5);
        let mut branch = Branch::new(|| true, Box::new(yes), Box::new(no));

        branch.interrupt();
        assert_eq!(yes_interrupts.get(), 0);
        assert_eq!(no_interrupts.get(), 0);
    }

    #[test]
    fn gated_holds_child_until_predicate_latches() {
        let open = Rc::new(Cell::new(false));
        let flag = Rc::clone(&open);
        let (child, child_runs, _) = Counted::new(2);
        let mut gated = Gated::new(move || flag.get(), Box::new(child));

        assert_eq!(gated.run(&ctx(0)), Status::Running);
        assert_eq!(gated.run(&ctx(1)), Status::Running);
        assert_eq!(child_runs.get(), 0);

        open.set(true);
        assert_eq!(gated.run(&ctx(2)), Status::Running);
        assert_eq!(child_runs.get(), 1);

        // Latched: closing the flag again does not stop the child.
        open.set(false);
        assert_eq!(gated.run(&ctx(3)), Status::Done);
        assert_eq!(child_runs.get(), 2);
    }

    #[test]
    fn closed_gate_interrupt_skips_child() {
        let (child, _, child_interrupts) = Counted::new(5);
        let mut gated = Gated::new(|| false, Box::new(child));

        gated.run(&ctx(0));
        gated.interrupt();
        assert_eq!(child_interrupts.get(), 0);
    }
}
