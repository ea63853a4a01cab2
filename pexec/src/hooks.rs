//! Lifecycle hooks for submissions.
//!
//! ```rust
//! use pexec::{NoopSubmissionHooks, SubmissionHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn SubmissionHooks) {}
//!
//! let hooks = NoopSubmissionHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use pcommon::{Generation, ToolId};
use presult::ProcessingResult;

use crate::ExecError;

/// What a hook sees about a submission. Option values are never included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub tool_id: ToolId,
    pub generation: Generation,
    pub endpoint: String,
    pub file_count: usize,
}

pub trait SubmissionHooks: Send + Sync {
    fn on_submit_start(&self, _event: &SubmissionEvent) {}

    fn on_submit_success(
        &self,
        _event: &SubmissionEvent,
        _result: &ProcessingResult,
        _elapsed: Duration,
    ) {
    }

    fn on_submit_failure(&self, _event: &SubmissionEvent, _error: &ExecError, _elapsed: Duration) {}

    /// The response arrived after the session moved to a newer generation.
    fn on_stale_response(&self, _event: &SubmissionEvent, _elapsed: Duration) {}

    /// The submission was refused before any request was issued.
    fn on_rejected(&self, _tool_id: Option<&ToolId>, _error: &ExecError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSubmissionHooks;

impl SubmissionHooks for NoopSubmissionHooks {}
