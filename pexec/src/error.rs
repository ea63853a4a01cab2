//! Submission errors and classifications.
//!
//! ```rust
//! use pexec::{ExecError, ExecErrorKind};
//!
//! let busy = ExecError::busy("a submission is already in flight");
//! assert_eq!(busy.kind, ExecErrorKind::Busy);
//! assert!(!busy.is_terminal());
//!
//! let transport = ExecError::transport("connection reset");
//! assert!(transport.is_terminal());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use pform::Violation;
use presult::{ResultError, ResultErrorKind};
use psession::{SessionError, SessionErrorKind};

pub const GENERIC_TRANSPORT_MESSAGE: &str = "An error occurred during processing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecErrorKind {
    /// Detected locally; no request was issued.
    Validation,
    Transport,
    Application,
    /// Rejected because a submission is already in flight.
    Busy,
    /// No active tool or no attached files.
    NotReady,
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecError {
    pub kind: ExecErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub violations: Vec<Violation>,
}

impl ExecError {
    pub fn new(kind: ExecErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            violations: Vec::new(),
        }
    }

    /// Carries every violation; the message is the first one's.
    pub fn validation(violations: Vec<Violation>) -> Self {
        let message = violations
            .first()
            .map(|violation| violation.message.clone())
            .unwrap_or_else(|| "submission is not valid".to_string());

        Self {
            violations,
            ..Self::new(ExecErrorKind::Validation, message)
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ExecErrorKind::Transport, message)
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::new(ExecErrorKind::Application, message)
    }

    pub fn busy(message: impl Into<String>) -> Self {
        Self::new(ExecErrorKind::Busy, message)
    }

    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::new(ExecErrorKind::NotReady, message)
    }

    pub fn session(message: impl Into<String>) -> Self {
        Self::new(ExecErrorKind::Session, message)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Errors that moved the session to failed.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            ExecErrorKind::Validation | ExecErrorKind::Transport | ExecErrorKind::Application
        )
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ExecErrorKind::Validation | ExecErrorKind::NotReady | ExecErrorKind::Busy
        )
    }
}

impl Display for ExecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ExecError {}

impl From<SessionError> for ExecError {
    fn from(value: SessionError) -> Self {
        let kind = match value.kind {
            SessionErrorKind::AlreadySubmitting => ExecErrorKind::Busy,
            SessionErrorKind::NoActiveTool => ExecErrorKind::NotReady,
            SessionErrorKind::TooManyFiles | SessionErrorKind::UnknownOption => {
                ExecErrorKind::Validation
            }
            SessionErrorKind::InvalidTransition => ExecErrorKind::Session,
        };

        Self::new(kind, value.message)
    }
}

impl From<ResultError> for ExecError {
    fn from(value: ResultError) -> Self {
        match value.kind {
            ResultErrorKind::Application => Self::application(value.message),
            ResultErrorKind::Malformed | ResultErrorKind::Download => {
                Self::transport(value.message)
            }
        }
    }
}
