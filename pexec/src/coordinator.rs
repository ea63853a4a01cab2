//! Single-flight submit lifecycle over one session.
//!
//! The session lock is only ever held between suspension points: the request
//! is prepared under the lock, issued without it, and its response is applied
//! under the lock again after checking that the session has not moved on to a
//! newer generation.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use presult::ProcessingResult;
use pschema::{OptionValue, ToolDefinition};
use psession::{FileHandle, SessionState, SessionView, SubmissionTicket};

use crate::{
    ExecError, NoopSubmissionHooks, ProcessingTransport, SubmissionEvent, SubmissionHooks,
    SubmissionPayload,
};

/// How a submission that reached the network ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(ProcessingResult),
    /// The response belonged to a superseded generation and was dropped.
    Discarded(SubmissionTicket),
}

impl SubmitOutcome {
    pub fn result(&self) -> Option<&ProcessingResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Discarded(_) => None,
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded(_))
    }
}

pub struct ExecutionCoordinatorBuilder {
    transport: Arc<dyn ProcessingTransport>,
    hooks: Arc<dyn SubmissionHooks>,
    session: SessionState,
}

impl ExecutionCoordinatorBuilder {
    pub fn new(transport: Arc<dyn ProcessingTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopSubmissionHooks),
            session: SessionState::new(),
        }
    }

    pub fn hooks(mut self, hooks: Arc<dyn SubmissionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    pub fn build(self) -> ExecutionCoordinator {
        ExecutionCoordinator {
            session: Mutex::new(self.session),
            transport: self.transport,
            hooks: self.hooks,
        }
    }
}

pub struct ExecutionCoordinator {
    session: Mutex<SessionState>,
    transport: Arc<dyn ProcessingTransport>,
    hooks: Arc<dyn SubmissionHooks>,
}

impl ExecutionCoordinator {
    pub fn new(transport: Arc<dyn ProcessingTransport>) -> Self {
        Self::builder(transport).build()
    }

    pub fn builder(transport: Arc<dyn ProcessingTransport>) -> ExecutionCoordinatorBuilder {
        ExecutionCoordinatorBuilder::new(transport)
    }

    pub fn activate_tool(&self, tool: Arc<ToolDefinition>) -> Result<(), ExecError> {
        self.session()?.activate_tool(tool);
        Ok(())
    }

    pub fn attach_files(&self, files: Vec<FileHandle>) -> Result<(), ExecError> {
        Ok(self.session()?.attach_files(files)?)
    }

    /// Activates `tool` unless it is already active, then drops `files` on it.
    /// Option values restart from the tool defaults on every drop.
    pub fn select_files(
        &self,
        tool: Arc<ToolDefinition>,
        files: Vec<FileHandle>,
    ) -> Result<(), ExecError> {
        let mut session = self.session()?;

        let already_active = session
            .active_tool()
            .is_some_and(|active| active.id == tool.id);
        if !already_active {
            session.activate_tool(tool);
        }

        Ok(session.drop_files(files)?)
    }

    pub fn set_option(
        &self,
        key: &str,
        value: impl Into<OptionValue>,
    ) -> Result<Option<OptionValue>, ExecError> {
        Ok(self.session()?.set_option(key, value)?)
    }

    pub fn view(&self) -> Result<SessionView, ExecError> {
        Ok(self.session()?.view())
    }

    pub fn snapshot(&self) -> Result<SessionState, ExecError> {
        Ok(self.session()?.clone())
    }

    /// Validates, issues, and applies one submission.
    ///
    /// Refusals (`Busy`, `NotReady`) leave the session untouched. A validation
    /// failure moves the session to failed without a request. Transport and
    /// application failures move it to failed and are returned as errors. A
    /// response for a superseded generation is dropped and reported as
    /// [`SubmitOutcome::Discarded`].
    pub async fn submit(&self) -> Result<SubmitOutcome, ExecError> {
        let (ticket, payload, event) = self.prepare()?;

        self.hooks.on_submit_start(&event);
        tracing::debug!(
            tool_id = %event.tool_id,
            generation = event.generation.value(),
            file_count = event.file_count,
            "submission issued"
        );

        let started = Instant::now();
        let outcome = match self.transport.submit(payload).await {
            Ok(response) => response.interpret(),
            Err(error) => Err(error),
        };
        let elapsed = started.elapsed();

        self.apply(ticket, event, outcome, elapsed)
    }

    fn prepare(&self) -> Result<(SubmissionTicket, SubmissionPayload, SubmissionEvent), ExecError> {
        let mut session = self.session()?;

        let Some(tool) = session.active_tool().cloned() else {
            return Err(self.refuse(None, ExecError::not_ready("no tool is active")));
        };

        if session.phase() == psession::Phase::Submitting {
            return Err(self.refuse(
                Some(&tool),
                ExecError::busy("a submission is already in flight"),
            ));
        }

        if session.selected_files().is_empty() {
            return Err(self.refuse(Some(&tool), ExecError::not_ready("no files are attached")));
        }

        let violations = session.violations();
        if !violations.is_empty() {
            let error = ExecError::validation(violations);
            session.reject(error.message.clone())?;
            return Err(self.refuse(Some(&tool), error));
        }

        let payload =
            SubmissionPayload::build(&tool, session.selected_files(), session.option_values());
        let ticket = session.begin_submit()?;
        let event = SubmissionEvent {
            tool_id: tool.id.clone(),
            generation: ticket.generation,
            endpoint: tool.endpoint.clone(),
            file_count: payload.files.len(),
        };

        Ok((ticket, payload, event))
    }

    fn apply(
        &self,
        ticket: SubmissionTicket,
        event: SubmissionEvent,
        outcome: Result<ProcessingResult, ExecError>,
        elapsed: Duration,
    ) -> Result<SubmitOutcome, ExecError> {
        let mut session = self.session()?;

        if !session.is_current(&ticket) {
            tracing::debug!(
                tool_id = %event.tool_id,
                generation = event.generation.value(),
                current_generation = session.generation().value(),
                "discarding stale response"
            );
            self.hooks.on_stale_response(&event, elapsed);
            return Ok(SubmitOutcome::Discarded(ticket));
        }

        match outcome {
            Ok(result) => {
                session.complete_success(result.clone())?;
                self.hooks.on_submit_success(&event, &result, elapsed);
                Ok(SubmitOutcome::Completed(result))
            }
            Err(error) => {
                session.complete_failure(error.message.clone())?;
                self.hooks.on_submit_failure(&event, &error, elapsed);
                Err(error)
            }
        }
    }

    fn refuse(&self, tool: Option<&Arc<ToolDefinition>>, error: ExecError) -> ExecError {
        self.hooks.on_rejected(tool.map(|tool| &tool.id), &error);
        error
    }

    fn session(&self) -> Result<MutexGuard<'_, SessionState>, ExecError> {
        self.session
            .lock()
            .map_err(|_| ExecError::session("session lock poisoned"))
    }
}
