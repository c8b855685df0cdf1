//! Tick-driven action composition for robot control loops.
//!
//! This library turns primitive, single-tick operations into sequences,
//! parallel groups, races, and conditional compositions that a host control
//! loop can drive to completion one cycle at a time, without ever blocking.
//!
//! - **Host-driven**: the engine never spawns its own timing loop; progress
//!   happens only when the host advances it
//! - **Non-blocking**: every [`Action::run`] returns within the current cycle,
//!   keeping internal progress in fields rather than on the stack
//! - **Uniform contract**: a composition is itself an [`Action`], so nodes
//!   nest to arbitrary depth
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Action`]: core trait for all nodes
//! - [`Status`]: `Running` or `Done` (no failure state; see below)
//! - Composite nodes: [`Sequential`], [`Parallel`], [`Race`]
//! - Predicate routing: [`Branch`], [`Gated`]
//! - Decorator nodes: [`Repeat`], [`Retry`], [`Dynamic`], [`Failover`]
//! - Leaf nodes: [`Instant`], [`Delay`], [`WaitUntil`]
//!
//! Domain failure is not part of the engine's vocabulary: an action that
//! gives up still reports [`Status::Done`], and the composition author
//! threads the outcome out-of-band ([`Retry`] shows the pattern).
//!
//! # Example
//!
//! ```
//! use actions::{Action, Delay, Sequential, Status, TickContext};
//!
//! let mut auto = Sequential::new(vec![Box::new(Delay::ticks(2))]);
//!
//! let mut status = Status::Running;
//! for tick in 0..2 {
//!     status = auto.run(&TickContext::new(tick));
//! }
//! assert_eq!(status, Status::Done);
//! ```

pub mod action;
pub mod branch;
pub mod builder;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use action::Action;
pub use branch::{Branch, Gated};
pub use composite::{Parallel, Race, Sequential};
pub use context::TickContext;
pub use decorator::{Dynamic, Failover, FailoverTrigger, Repeat, Retry};
pub use leaf::{Delay, Instant, WaitUntil};
pub use status::Status;
