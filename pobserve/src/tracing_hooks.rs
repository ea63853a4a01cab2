//! Tracing-based observability hooks for the submit lifecycle.
//!
//! ```rust
//! use pexec::SubmissionHooks;
//! use pobserve::TracingSubmissionHooks;
//!
//! fn accepts_submission_hooks(_hooks: &dyn SubmissionHooks) {}
//!
//! let hooks = TracingSubmissionHooks;
//! accepts_submission_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::ToolId;
use pexec::{ExecError, SubmissionEvent, SubmissionHooks};
use presult::ProcessingResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSubmissionHooks;

impl SubmissionHooks for TracingSubmissionHooks {
    fn on_submit_start(&self, event: &SubmissionEvent) {
        tracing::info!(
            phase = "submit",
            event = "start",
            tool_id = %event.tool_id,
            generation = event.generation.value(),
            endpoint = %event.endpoint,
            file_count = event.file_count
        );
    }

    fn on_submit_success(
        &self,
        event: &SubmissionEvent,
        result: &ProcessingResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "submit",
            event = "success",
            tool_id = %event.tool_id,
            generation = event.generation.value(),
            file_count = event.file_count,
            artifacts = result.artifacts.links().len(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_submit_failure(&self, event: &SubmissionEvent, error: &ExecError, elapsed: Duration) {
        tracing::error!(
            phase = "submit",
            event = "failure",
            tool_id = %event.tool_id,
            generation = event.generation.value(),
            file_count = event.file_count,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }

    fn on_stale_response(&self, event: &SubmissionEvent, elapsed: Duration) {
        tracing::debug!(
            phase = "submit",
            event = "stale_response",
            tool_id = %event.tool_id,
            generation = event.generation.value(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_rejected(&self, tool_id: Option<&ToolId>, error: &ExecError) {
        tracing::warn!(
            phase = "submit",
            event = "rejected",
            tool_id = tool_id.map(ToolId::as_str),
            error_kind = ?error.kind,
            violations = error.violations.len(),
            error = %error
        );
    }
}
