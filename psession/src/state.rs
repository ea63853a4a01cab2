//! The single mutable record the view renders from.
//!
//! All mutation goes through named transitions. Every activation or
//! attachment starts a new [`Generation`]; a submission remembers the
//! generation it was issued against so a late response can be recognized as
//! stale.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use psession::{FileHandle, Phase, SessionState};
//! use pschema::{OptionDefinition, ToolCategory, ToolDefinition};
//!
//! let rotate = Arc::new(
//!     ToolDefinition::new("rotate-pages", ToolCategory::Edit, "/api/edit/rotate")
//!         .with_option(OptionDefinition::short_text("pages", "Pages").with_default("all")),
//! );
//!
//! let mut session = SessionState::new();
//! session.activate_tool(rotate);
//! session
//!     .attach_files(vec![FileHandle::pdf("scan.pdf", b"%PDF-1.7".to_vec())])
//!     .expect("one file fits");
//! assert_eq!(session.phase(), Phase::FilesChosen);
//!
//! let ticket = session.begin_submit().expect("ready to submit");
//! assert!(session.is_current(&ticket));
//! assert!(session.begin_submit().is_err());
//! ```

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use pcommon::Generation;
use pform::{OptionValues, Violation, validate, visible_options};
use presult::ProcessingResult;
use pschema::{OptionDefinition, OptionValue, ToolDefinition, ToolId};

use crate::{FileHandle, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    FilesChosen,
    Submitting,
    Succeeded,
    Failed,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::FilesChosen => "filesChosen",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };

        f.write_str(name)
    }
}

/// Proof that a submission was started, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub tool_id: ToolId,
    pub generation: Generation,
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Success(ProcessingResult),
    Failure(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    active_tool: Option<Arc<ToolDefinition>>,
    selected_files: Vec<FileHandle>,
    option_values: OptionValues,
    phase: Phase,
    outcome: Option<Outcome>,
    generation: Generation,
    in_flight: Option<Generation>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tool(&self) -> Option<&Arc<ToolDefinition>> {
        self.active_tool.as_ref()
    }

    pub fn selected_files(&self) -> &[FileHandle] {
        &self.selected_files
    }

    pub fn option_values(&self) -> &OptionValues {
        &self.option_values
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Present only while the phase is succeeded.
    pub fn result(&self) -> Option<&ProcessingResult> {
        match &self.outcome {
            Some(Outcome::Success(result)) => Some(result),
            _ => None,
        }
    }

    /// Present only while the phase is failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failure(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_current(&self, ticket: &SubmissionTicket) -> bool {
        self.in_flight == Some(ticket.generation)
            && self.phase() == Phase::Submitting
            && self
                .active_tool
                .as_ref()
                .is_some_and(|tool| tool.id == ticket.tool_id)
    }

    pub fn visible_options(&self) -> Vec<&OptionDefinition> {
        match &self.active_tool {
            Some(tool) => visible_options(tool, &self.option_values),
            None => Vec::new(),
        }
    }

    pub fn violations(&self) -> Vec<Violation> {
        match &self.active_tool {
            Some(tool) => validate(tool, &self.option_values, self.selected_files.len()),
            None => Vec::new(),
        }
    }

    /// Replaces the whole session with a fresh one for `tool`.
    pub fn activate_tool(&mut self, tool: Arc<ToolDefinition>) {
        let generation = self.generation.next();
        tracing::debug!(
            transition = "activate_tool",
            tool_id = %tool.id,
            generation = generation.value(),
        );

        *self = Self {
            option_values: OptionValues::seeded(&tool),
            active_tool: Some(tool),
            phase: Phase::Idle,
            generation,
            ..Self::default()
        };
    }

    /// Replaces the selected files; never appends across drops.
    pub fn attach_files(&mut self, files: Vec<FileHandle>) -> Result<(), SessionError> {
        let tool = self.require_tool()?;

        if files.len() > tool.max_files {
            return Err(SessionError::too_many_files(format!(
                "tool '{}' accepts at most {} file(s), got {}",
                tool.id,
                tool.max_files,
                files.len()
            )));
        }

        self.generation = self.generation.next();
        self.phase = if files.is_empty() {
            Phase::Idle
        } else {
            Phase::FilesChosen
        };
        self.selected_files = files;
        self.outcome = None;
        self.in_flight = None;

        tracing::debug!(
            transition = "attach_files",
            file_count = self.selected_files.len(),
            generation = self.generation.value(),
            phase = %self.phase(),
        );
        Ok(())
    }

    /// A file set dropped on the active tool: values are reseeded from the
    /// defaults and the files replace the previous selection.
    pub fn drop_files(&mut self, files: Vec<FileHandle>) -> Result<(), SessionError> {
        let tool = Arc::clone(self.require_tool()?);
        let previous = std::mem::replace(&mut self.option_values, OptionValues::seeded(&tool));

        if let Err(error) = self.attach_files(files) {
            self.option_values = previous;
            return Err(error);
        }
        Ok(())
    }

    pub fn set_option(
        &mut self,
        key: &str,
        value: impl Into<OptionValue>,
    ) -> Result<Option<OptionValue>, SessionError> {
        let tool = self.require_tool()?;

        if tool.option(key).is_none() {
            return Err(SessionError::unknown_option(format!(
                "tool '{}' has no option '{key}'",
                tool.id
            )));
        }

        tracing::debug!(transition = "set_option", option_key = key);
        Ok(self.option_values.insert(key, value))
    }

    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SessionError> {
        let tool_id = self.require_tool()?.id.clone();

        match self.phase() {
            Phase::Submitting => {
                return Err(SessionError::already_submitting(
                    "a submission is already in flight",
                ));
            }
            Phase::Idle => {
                return Err(SessionError::invalid_transition(
                    "cannot submit before files are chosen",
                ));
            }
            Phase::FilesChosen | Phase::Succeeded | Phase::Failed => {}
        }

        self.phase = Phase::Submitting;
        self.outcome = None;
        self.in_flight = Some(self.generation);

        tracing::debug!(
            transition = "begin_submit",
            tool_id = %tool_id,
            generation = self.generation.value(),
        );
        Ok(SubmissionTicket {
            tool_id,
            generation: self.generation,
        })
    }

    pub fn complete_success(&mut self, result: ProcessingResult) -> Result<(), SessionError> {
        self.require_submitting("complete_success")?;
        self.phase = Phase::Succeeded;
        self.outcome = Some(Outcome::Success(result));
        self.in_flight = None;

        tracing::debug!(transition = "complete_success", generation = self.generation.value());
        Ok(())
    }

    pub fn complete_failure(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        self.require_submitting("complete_failure")?;
        self.fail(message.into());

        tracing::debug!(transition = "complete_failure", generation = self.generation.value());
        Ok(())
    }

    /// Fails the session without a request having been issued.
    pub fn reject(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        match self.phase() {
            Phase::FilesChosen | Phase::Succeeded | Phase::Failed => {}
            phase => {
                return Err(SessionError::invalid_transition(format!(
                    "cannot reject a submission while {phase}"
                )));
            }
        }

        self.fail(message.into());
        tracing::debug!(transition = "reject", generation = self.generation.value());
        Ok(())
    }

    fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.outcome = Some(Outcome::Failure(message));
        self.in_flight = None;
    }

    fn require_tool(&self) -> Result<&Arc<ToolDefinition>, SessionError> {
        self.active_tool
            .as_ref()
            .ok_or_else(|| SessionError::no_active_tool("no tool is active"))
    }

    fn require_submitting(&self, transition: &str) -> Result<(), SessionError> {
        if self.phase() == Phase::Submitting {
            return Ok(());
        }

        Err(SessionError::invalid_transition(format!(
            "{transition} requires phase submitting, found {}",
            self.phase()
        )))
    }
}
