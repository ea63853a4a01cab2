//! Result interpretation errors and classifications.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const GENERIC_FAILURE_MESSAGE: &str = "Operation failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultErrorKind {
    /// The service answered and marked the operation unsuccessful.
    Application,
    /// The response body was not a recognizable result envelope.
    Malformed,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultError {
    pub kind: ResultErrorKind,
    pub message: String,
}

impl ResultError {
    pub fn new(kind: ResultErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::new(ResultErrorKind::Application, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ResultErrorKind::Malformed, message)
    }

    pub fn download(message: impl Into<String>) -> Self {
        Self::new(ResultErrorKind::Download, message)
    }
}

impl Display for ResultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ResultError {}

impl From<serde_json::Error> for ResultError {
    fn from(value: serde_json::Error) -> Self {
        Self::malformed(format!("response is not a result envelope: {value}"))
    }
}
