//! Opaque handles identifying scheduled roots.

use std::fmt;

/// Identifier for a root composition registered with a
/// [`Runner`](crate::Runner).
///
/// Handles are unique per runner for its lifetime and are never reused, so a
/// stale handle can always be passed to [`cancel`](crate::Runner::cancel)
/// safely (it is a no-op once the root is gone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionHandle(u64);

impl ActionHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
