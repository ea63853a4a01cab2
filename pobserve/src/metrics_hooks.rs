//! Metrics-based observability hooks for the submit lifecycle.
//!
//! ```rust
//! use pexec::SubmissionHooks;
//! use pobserve::MetricsSubmissionHooks;
//!
//! fn accepts_submission_hooks(_hooks: &dyn SubmissionHooks) {}
//!
//! let hooks = MetricsSubmissionHooks;
//! accepts_submission_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::ToolId;
use pexec::{ExecError, SubmissionEvent, SubmissionHooks};
use presult::ProcessingResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSubmissionHooks;

impl SubmissionHooks for MetricsSubmissionHooks {
    fn on_submit_start(&self, event: &SubmissionEvent) {
        metrics::counter!(
            "pagesmith_submit_start_total",
            "tool_id" => event.tool_id.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "pagesmith_submit_files",
            "tool_id" => event.tool_id.to_string()
        )
        .record(event.file_count as f64);
    }

    fn on_submit_success(
        &self,
        event: &SubmissionEvent,
        _result: &ProcessingResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "pagesmith_submit_success_total",
            "tool_id" => event.tool_id.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "pagesmith_submit_duration_seconds",
            "tool_id" => event.tool_id.to_string(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_submit_failure(&self, event: &SubmissionEvent, error: &ExecError, elapsed: Duration) {
        metrics::counter!(
            "pagesmith_submit_failure_total",
            "tool_id" => event.tool_id.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "pagesmith_submit_duration_seconds",
            "tool_id" => event.tool_id.to_string(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_stale_response(&self, event: &SubmissionEvent, _elapsed: Duration) {
        metrics::counter!(
            "pagesmith_submit_stale_total",
            "tool_id" => event.tool_id.to_string()
        )
        .increment(1);
    }

    fn on_rejected(&self, tool_id: Option<&ToolId>, error: &ExecError) {
        metrics::counter!(
            "pagesmith_submit_rejected_total",
            "tool_id" => tool_id.map(ToolId::to_string).unwrap_or_else(|| "none".to_string()),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
