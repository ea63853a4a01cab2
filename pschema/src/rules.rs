//! Tool-specific validation rules evaluated after the required-value pass.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraRule {
    /// A non-empty value for `key` must be at least `min` characters long.
    MinLength {
        key: String,
        min: usize,
        message: Option<String>,
    },
}

impl ExtraRule {
    pub fn min_length(key: impl Into<String>, min: usize) -> Self {
        Self::MinLength {
            key: key.into(),
            min,
            message: None,
        }
    }

    pub fn with_message(self, text: impl Into<String>) -> Self {
        match self {
            Self::MinLength { key, min, .. } => Self::MinLength {
                key,
                min,
                message: Some(text.into()),
            },
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::MinLength { key, .. } => key.as_str(),
        }
    }
}
