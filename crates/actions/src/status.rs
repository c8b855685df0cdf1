//! Status returned by actions each tick.

/// The result of advancing an action by one tick.
///
/// # Cooperative Semantics
///
/// An action never blocks inside [`run`](crate::Action::run): a physical
/// operation that spans many control cycles reports `Running` each tick and
/// tracks its own progress between calls. `Done` is terminal in both
/// directions — the engine does not distinguish success from a recognized
/// failure outcome, and a done action is never ticked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The action has more work to do and must be ticked again next cycle.
    Running,

    /// The action reached a terminal outcome and must not be ticked again.
    Done,
}

impl Status {
    /// Returns `true` if this status is `Done`.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Status::Done)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}
