//! Read-only projection handed to the view renderer.

use pcommon::Generation;
use pform::{OptionValues, Violation};
use presult::ProcessingResult;
use pschema::{OptionDefinition, ToolId};

use crate::{Phase, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Snapshot of the session plus derived visibility and validation output.
///
/// Derived fields are recomputed on every call to [`SessionState::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub tool_id: Option<ToolId>,
    pub phase: Phase,
    pub generation: Generation,
    pub files: Vec<FileSummary>,
    pub option_values: OptionValues,
    pub visible_options: Vec<OptionDefinition>,
    pub violations: Vec<Violation>,
    pub result: Option<ProcessingResult>,
    pub error_message: Option<String>,
}

impl SessionView {
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            Phase::FilesChosen | Phase::Succeeded | Phase::Failed
        ) && self.violations.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

impl SessionState {
    pub fn view(&self) -> SessionView {
        SessionView {
            tool_id: self.active_tool().map(|tool| tool.id.clone()),
            phase: self.phase(),
            generation: self.generation(),
            files: self
                .selected_files()
                .iter()
                .map(|file| FileSummary {
                    name: file.name.clone(),
                    size: file.size,
                    mime: file.mime.clone(),
                })
                .collect(),
            option_values: self.option_values().clone(),
            visible_options: self.visible_options().into_iter().cloned().collect(),
            violations: self.violations(),
            result: self.result().cloned(),
            error_message: self.error_message().map(str::to_string),
        }
    }
}
