use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pcommon::ToolId;
use pexec::{ExecError, SubmissionEvent, SubmissionHooks};
use presult::ProcessingResult;

/// Absorbs panics raised by the wrapped hooks so a faulty observer cannot
/// abort a submission.
pub struct SafeSubmissionHooks<H> {
    inner: H,
}

impl<H> SafeSubmissionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H> SubmissionHooks for SafeSubmissionHooks<H>
where
    H: SubmissionHooks,
{
    fn on_submit_start(&self, event: &SubmissionEvent) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_submit_start(event)));
    }

    fn on_submit_success(
        &self,
        event: &SubmissionEvent,
        result: &ProcessingResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_success(event, result, elapsed)
        }));
    }

    fn on_submit_failure(&self, event: &SubmissionEvent, error: &ExecError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_failure(event, error, elapsed)
        }));
    }

    fn on_stale_response(&self, event: &SubmissionEvent, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_stale_response(event, elapsed)
        }));
    }

    fn on_rejected(&self, tool_id: Option<&ToolId>, error: &ExecError) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_rejected(tool_id, error)));
    }
}
