//! Logging and tracing facilities for ColorSlider.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Named targets and spans for filtering subsystems
//! - Performance tracing hooks for profiling paint passes
//!
//! # Tracing Integration
//!
//! ColorSlider uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("colorslider::paint=warn,colorslider::input=trace")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout ColorSlider for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// One render-pipeline pass.
    pub const PAINT: &str = "colorslider::paint";
    /// Signal emission span.
    pub const SIGNAL: &str = "colorslider::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "colorslider_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "colorslider_core::signal";
    /// Slider configuration target.
    pub const SLIDER: &str = "colorslider::slider";
    /// Pointer and keyboard handling target.
    pub const INPUT: &str = "colorslider::input";
    /// Render pipeline target.
    pub const PAINT: &str = "colorslider::paint";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "colorslider::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for slider configuration logging.
///
/// Thin wrappers around the `tracing` macros that fix the target to
/// [`targets::SLIDER`].
#[macro_export]
macro_rules! slider_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: $crate::logging::targets::SLIDER, $($arg)*)
    };
}

#[macro_export]
macro_rules! slider_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: $crate::logging::targets::SLIDER, $($arg)*)
    };
}

#[macro_export]
macro_rules! slider_info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::logging::targets::SLIDER, $($arg)*)
    };
}

#[macro_export]
macro_rules! slider_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::logging::targets::SLIDER, $($arg)*)
    };
}

#[macro_export]
macro_rules! slider_error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::logging::targets::SLIDER, $($arg)*)
    };
}
