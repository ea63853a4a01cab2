//! Facade-level errors.
//!
//! ```rust
//! use pagesmith::{EngineError, EngineErrorKind};
//!
//! let err = EngineError::config("PAGESMITH_BASE_URL is not set");
//! assert_eq!(err.kind, EngineErrorKind::Config);
//! assert_eq!(err.to_string(), "Config: PAGESMITH_BASE_URL is not set");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use pexec::{ExecError, ExecErrorKind};
use pschema::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    Config,
    Catalog,
    Exec(ExecErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub message: String,
}

impl EngineError {
    pub fn new(kind: EngineErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::Config, message)
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::Catalog, message)
    }

    pub fn exec_kind(&self) -> Option<ExecErrorKind> {
        match self.kind {
            EngineErrorKind::Exec(kind) => Some(kind),
            _ => None,
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EngineErrorKind::Exec(kind) => write!(f, "{:?}: {}", kind, self.message),
            kind => write!(f, "{:?}: {}", kind, self.message),
        }
    }
}

impl Error for EngineError {}

impl From<SchemaError> for EngineError {
    fn from(value: SchemaError) -> Self {
        Self::catalog(value.to_string())
    }
}

impl From<ExecError> for EngineError {
    fn from(value: ExecError) -> Self {
        Self::new(EngineErrorKind::Exec(value.kind), value.message)
    }
}
