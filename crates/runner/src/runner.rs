//! Root registry and per-cycle tick loop.

use actions::{Action, TickContext};
use tracing::{debug, error, trace};

use crate::{ActionHandle, Result, RunnerError};

/// Lifecycle of a scheduled root.
///
/// `Pending → Running → {Completed | Cancelled}`, then removed. No root
/// transitions back out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
    /// Registered, not yet first-ticked.
    Pending,
    Running,
    Completed,
    Cancelled,
}

impl RootState {
    fn is_terminal(self) -> bool {
        matches!(self, RootState::Completed | RootState::Cancelled)
    }
}

struct RootEntry {
    handle: ActionHandle,
    action: Box<dyn Action>,
    state: RootState,
}

/// Owns the set of running root compositions and provides the host-facing
/// control surface.
///
/// Roots are ticked in registration order, each exactly once per
/// [`tick`](Runner::tick), which keeps execution deterministic and bounded
/// by the number of currently active nodes. The entire tree is transient:
/// nothing is persisted, and a behavior is rebuilt each time it is
/// scheduled.
pub struct Runner {
    roots: Vec<RootEntry>,
    next_id: u64,
    ticks: u64,
    in_tick: bool,
}

impl Runner {
    /// Creates an empty runner.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            next_id: 0,
            ticks: 0,
            in_tick: false,
        }
    }

    /// Reserves a handle without attaching a composition.
    ///
    /// Lets the host give a logical behavior a stable slot across restarts;
    /// see [`schedule_with`](Runner::schedule_with).
    pub fn reserve(&mut self) -> ActionHandle {
        let handle = ActionHandle::new(self.next_id);
        self.next_id += 1;
        handle
    }

    /// Attaches a new root composition and returns its handle.
    pub fn schedule(&mut self, action: Box<dyn Action>) -> ActionHandle {
        let handle = self.reserve();
        self.attach(handle, action);
        handle
    }

    /// Attaches a composition under a previously reserved handle.
    ///
    /// Fails with [`RunnerError::AlreadyScheduled`] if that handle is still
    /// registered — a logical behavior must not occupy its slot twice. The
    /// occupant's execution is unaffected by a rejected call.
    pub fn schedule_with(&mut self, handle: ActionHandle, action: Box<dyn Action>) -> Result<()> {
        if self.roots.iter().any(|entry| entry.handle == handle) {
            return Err(RunnerError::AlreadyScheduled(handle));
        }
        self.attach(handle, action);
        Ok(())
    }

    fn attach(&mut self, handle: ActionHandle, action: Box<dyn Action>) {
        debug!(%handle, "root scheduled");
        self.roots.push(RootEntry {
            handle,
            action,
            state: RootState::Pending,
        });
    }

    /// Interrupts and unregisters the root for `handle`.
    ///
    /// Cancellation is synchronous and total: `interrupt()` has propagated
    /// depth-first through every active descendant before this returns, so
    /// no descendant action remains active afterwards. The entry itself is
    /// swept on the next tick. Cancelling an unknown or already-finished
    /// handle is a no-op, not an error; a second cancel of the same handle
    /// observes the terminal state and does nothing.
    pub fn cancel(&mut self, handle: ActionHandle) {
        let Some(entry) = self.roots.iter_mut().find(|entry| entry.handle == handle) else {
            return;
        };
        if entry.state.is_terminal() {
            return;
        }

        // A pending root never started, so there is nothing to clean up.
        if entry.state == RootState::Running {
            entry.action.interrupt();
        }
        entry.state = RootState::Cancelled;
        debug!(%handle, "root cancelled");
    }

    /// Advances every live root exactly once, in registration order, then
    /// sweeps roots that completed or were cancelled.
    ///
    /// All roots share a single [`TickContext`] stamped at the top of the
    /// pass. A root's `run` must not call back into the runner: re-entrant
    /// ticking would double-advance children, so it is rejected with
    /// [`RunnerError::ReentrantTick`] (fatal in debug builds). No panic
    /// crosses the tick boundary from the engine itself.
    pub fn tick(&mut self) -> Result<()> {
        if self.in_tick {
            debug_assert!(false, "Runner::tick re-entered from inside a running action");
            error!("tick re-entered from inside a running action");
            return Err(RunnerError::ReentrantTick);
        }
        self.in_tick = true;

        let ctx = TickContext::new(self.ticks);
        self.ticks += 1;

        for entry in &mut self.roots {
            if entry.state.is_terminal() {
                continue;
            }
            entry.state = RootState::Running;
            trace!(handle = %entry.handle, tick = ctx.index(), "root ticked");

            if entry.action.run(&ctx).is_done() {
                entry.state = RootState::Completed;
                debug!(handle = %entry.handle, tick = ctx.index(), "root completed");
            }
        }

        self.roots.retain(|entry| !entry.state.is_terminal());
        self.in_tick = false;

        Ok(())
    }

    /// True iff at least one root is currently registered.
    pub fn is_busy(&self) -> bool {
        !self.roots.is_empty()
    }

    /// Number of currently registered roots.
    pub fn active(&self) -> usize {
        self.roots.len()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use actions::{Status, builder};

    use super::*;

    struct Probe {
        done_after: u32,
        runs: Rc<Cell<u32>>,
        interrupts: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(done_after: u32) -> (Box<dyn Action>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
            let runs = Rc::new(Cell::new(0));
            let interrupts = Rc::new(Cell::new(0));
            (
                Box::new(Self {
                    done_after,
                    runs: Rc::clone(&runs),
                    interrupts: Rc::clone(&interrupts),
                }),
                runs,
                interrupts,
            )
        }
    }

    impl Action for Probe {
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

    #[test]
    fn completed_roots_are_swept() {
        let mut runner = Runner::new();
        let (probe, runs, _) = Probe::new(2);
        runner.schedule(probe);

        assert!(runner.is_busy());
        runner.tick().unwrap();
        assert!(runner.is_busy());
        runner.tick().unwrap();
        assert!(!runner.is_busy());

        // Extra ticks must not reach the finished action.
        runner.tick().unwrap();
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn roots_tick_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut runner = Runner::new();
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&order);
            runner.schedule(builder::instant(move || log.borrow_mut().push(name)));
        }

        runner.tick().unwrap();
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn cancel_interrupts_exactly_once() {
        let mut runner = Runner::new();
        let (probe, runs, interrupts) = Probe::new(10);
        let handle = runner.schedule(probe);

        runner.tick().unwrap();
        runner.cancel(handle);
        assert_eq!(interrupts.get(), 1);

        // Idempotent: the second cancel observes the terminal state.
        runner.cancel(handle);
        assert_eq!(interrupts.get(), 1);

        // The cancelled root is never ticked again and is swept.
        runner.tick().unwrap();
        assert_eq!(runs.get(), 1);
        assert!(!runner.is_busy());
    }

    #[test]
    fn cancel_pending_root_skips_interrupt() {
        let mut runner = Runner::new();
        let (probe, runs, interrupts) = Probe::new(10);
        let handle = runner.schedule(probe);

        // Never ticked, so there is nothing to clean up.
        runner.cancel(handle);
        assert_eq!(interrupts.get(), 0);

        runner.tick().unwrap();
        assert_eq!(runs.get(), 0);
        assert!(!runner.is_busy());
    }

    #[test]
    fn cancel_unknown_handle_is_a_no_op() {
        let mut runner = Runner::new();
        let stale = runner.reserve();
        runner.cancel(stale);
        assert!(!runner.is_busy());
    }

    #[test]
    fn schedule_with_rejects_occupied_slot() {
        let mut runner = Runner::new();
        let slot = runner.reserve();

        let (first, first_runs, _) = Probe::new(3);
        runner.schedule_with(slot, first).unwrap();

        let (second, second_runs, _) = Probe::new(1);
        assert_eq!(
            runner.schedule_with(slot, second),
            Err(RunnerError::AlreadyScheduled(slot))
        );

        // The occupant keeps running, untouched by the rejected call.
        runner.tick().unwrap();
        runner.tick().unwrap();
        runner.tick().unwrap();
        assert_eq!(first_runs.get(), 3);
        assert_eq!(second_runs.get(), 0);
        assert!(!runner.is_busy());
    }

    #[test]
    fn slot_is_reusable_after_completion() {
        let mut runner = Runner::new();
        let slot = runner.reserve();

        let (first, _, _) = Probe::new(1);
        runner.schedule_with(slot, first).unwrap();
        runner.tick().unwrap();

        let (second, second_runs, _) = Probe::new(1);
        runner.schedule_with(slot, second).unwrap();
        runner.tick().unwrap();
        assert_eq!(second_runs.get(), 1);
    }

    #[test]
    fn active_counts_registered_roots() {
        let mut runner = Runner::new();
        assert_eq!(runner.active(), 0);

        let (a, _, _) = Probe::new(5);
        let (b, _, _) = Probe::new(1);
        runner.schedule(a);
        runner.schedule(b);
        assert_eq!(runner.active(), 2);

        runner.tick().unwrap();
        assert_eq!(runner.active(), 1);
    }
}
