//! Schema authoring errors and classifications.
//!
//! ```rust
//! use pschema::{SchemaError, SchemaErrorKind};
//!
//! let err = SchemaError::condition_cycle("a -> b -> a").with_tool_id("split");
//! assert_eq!(err.kind, SchemaErrorKind::ConditionCycle);
//! assert!(err.to_string().contains("split"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    DuplicateTool,
    DuplicateOptionKey,
    UnknownConditionKey,
    SelfReference,
    ConditionCycle,
    InvalidConstraint,
    InvalidFileLimits,
    UnknownRuleKey,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub message: String,
    pub tool_id: Option<String>,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tool_id: None,
        }
    }

    pub fn duplicate_tool(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::DuplicateTool, message)
    }

    pub fn duplicate_option_key(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::DuplicateOptionKey, message)
    }

    pub fn unknown_condition_key(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::UnknownConditionKey, message)
    }

    pub fn self_reference(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::SelfReference, message)
    }

    pub fn condition_cycle(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::ConditionCycle, message)
    }

    pub fn invalid_constraint(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::InvalidConstraint, message)
    }

    pub fn invalid_file_limits(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::InvalidFileLimits, message)
    }

    pub fn unknown_rule_key(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::UnknownRuleKey, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::NotFound, message)
    }

    pub fn with_tool_id(mut self, tool_id: impl Into<String>) -> Self {
        self.tool_id = Some(tool_id.into());
        self
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.tool_id {
            Some(tool_id) => write!(f, "{:?} [tool={}]: {}", self.kind, tool_id, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for SchemaError {}
