//! Cooperative scheduler that drives action compositions to completion
//! across control-loop ticks.
//!
//! The [`Runner`] owns zero or more top-level running compositions (roots),
//! advances each exactly once per [`tick`](Runner::tick), and exposes the
//! `schedule`/`cancel`/`is_busy` surface to the host. Control flow is
//! strictly host-driven: the runner never spawns its own timing loop, and no
//! call blocks or suspends.
//!
//! # Example
//!
//! ```
//! use actions::builder;
//! use runner::Runner;
//!
//! let mut runner = Runner::new();
//! runner.schedule(builder::seq(vec![
//!     builder::wait_ticks(3),
//!     builder::instant(|| { /* open the claw */ }),
//! ]));
//!
//! while runner.is_busy() {
//!     runner.tick().expect("tick must not be re-entered");
//! }
//! ```

pub mod error;
pub mod handle;
pub mod runner;

pub use error::{Result, RunnerError};
pub use handle::ActionHandle;
pub use runner::Runner;
