//! Error types surfaced by the scheduler.
//!
//! Both variants are local-contract violations that must never be swallowed.
//! Domain-level action failure is deliberately absent: the engine treats it
//! as ordinary completion with caller-defined meaning.

use thiserror::Error;

use crate::ActionHandle;

pub type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunnerError {
    /// The handle is still registered; a logical behavior cannot occupy its
    /// slot twice. The occupant's execution is unaffected by the rejection.
    #[error("handle {0} is already scheduled")]
    AlreadyScheduled(ActionHandle),

    /// `tick` was re-entered from inside a running action. This is a
    /// programming error: a nested tick would double-advance children.
    /// Fatal in debug builds.
    #[error("tick re-entered from inside a running action")]
    ReentrantTick,
}
