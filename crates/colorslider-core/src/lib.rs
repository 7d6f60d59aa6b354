//! Shared plumbing for the ColorSlider crates.
//!
//! - [`Signal`]: synchronous multi-subscriber notifications, used for
//!   `value_changed` and `scroll`.
//! - [`logging`]: `tracing` target and span names, logging macros and
//!   [`PerfSpan`].

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

// Lets the logging macros resolve `tracing` from downstream crates.
#[doc(hidden)]
pub use tracing;
