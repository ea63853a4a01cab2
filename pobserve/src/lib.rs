//! Production-friendly observability hooks for document submissions.
//!
//! ```rust
//! use pobserve::{MetricsSubmissionHooks, SafeSubmissionHooks, TracingSubmissionHooks};
//!
//! let _hooks = SafeSubmissionHooks::new(TracingSubmissionHooks);
//! let _metrics = MetricsSubmissionHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsSubmissionHooks;
pub use safe_hooks::SafeSubmissionHooks;
pub use tracing_hooks::TracingSubmissionHooks;

pub mod prelude {
    pub use crate::{MetricsSubmissionHooks, SafeSubmissionHooks, TracingSubmissionHooks};
}
