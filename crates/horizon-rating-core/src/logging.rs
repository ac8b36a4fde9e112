//! Logging facilities for Horizon Rating.
//!
//! Horizon Rating uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every log statement in the workspace uses one of the [`targets`] so hosts
//! can filter by subsystem, e.g. `RUST_LOG=horizon_rating::rating=debug`.

/// Span names used throughout Horizon Rating for tracing.
pub mod span_names {
    /// Widget paint pass span.
    pub const PAINT: &str = "horizon_rating::paint";
    /// Image resolution span.
    pub const RESOLVE: &str = "horizon_rating::resolve";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_rating_core::signal";
    /// Generic widget plumbing target.
    pub const WIDGET: &str = "horizon_rating::widget";
    /// Rating control state transitions.
    pub const RATING: &str = "horizon_rating::rating";
    /// Named image resolution.
    pub const RESOURCES: &str = "horizon_rating_render::resources";
    /// Drawing backends.
    pub const RENDER: &str = "horizon_rating_render";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_rating::config";
}

/// Performance tracing span for profiling.
///
/// Creates an entered span that is exited when the guard is dropped.
///
/// ```
/// use horizon_rating_core::logging::{PerfSpan, span_names};
///
/// {
///     let _span = PerfSpan::new(span_names::PAINT);
///     // ... timed work ...
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_rating::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}
