//! Session transition errors and classifications.
//!
//! ```rust
//! use psession::{SessionError, SessionErrorKind};
//!
//! let err = SessionError::already_submitting("a submission is in flight");
//! assert_eq!(err.kind, SessionErrorKind::AlreadySubmitting);
//! assert!(err.to_string().contains("in flight"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    NoActiveTool,
    TooManyFiles,
    UnknownOption,
    InvalidTransition,
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn no_active_tool(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::NoActiveTool, message)
    }

    pub fn too_many_files(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::TooManyFiles, message)
    }

    pub fn unknown_option(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::UnknownOption, message)
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::InvalidTransition, message)
    }

    pub fn already_submitting(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::AlreadySubmitting, message)
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            SessionErrorKind::TooManyFiles | SessionErrorKind::UnknownOption
        )
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SessionError {}
