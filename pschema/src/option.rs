//! Option definitions: one user-configurable parameter of a tool.
//!
//! ```rust
//! use pschema::{Choice, OptionDefinition, OptionValue};
//!
//! let split_type = OptionDefinition::select(
//!     "splitType",
//!     "Split Type",
//!     vec![Choice::new("pages", "Individual pages"), Choice::new("ranges", "Custom ranges")],
//! )
//! .with_default("pages");
//!
//! let ranges = OptionDefinition::short_text("ranges", "Page Ranges")
//!     .visible_when("splitType", "ranges");
//!
//! assert_eq!(split_type.default, Some(OptionValue::from("pages")));
//! assert!(ranges.visibility.is_some());
//! ```

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A value held for one option, as entered by the user or seeded from a default.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Number(f64),
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Number(_) => None,
        }
    }

    /// Numeric view of the value; text is parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse::<f64>().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(value) => value.is_nan(),
        }
    }

    /// String form sent as a multipart field value.
    pub fn to_form_value(&self) -> String {
        self.to_string()
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn bounded(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Option kind, tagged with the constraints that only make sense for that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    ShortText,
    LongText,
    SecretText,
    Number(NumericRange),
    SingleSelect(Vec<Choice>),
    Slider(NumericRange),
}

impl OptionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortText => "short-text",
            Self::LongText => "long-text",
            Self::SecretText => "secret-text",
            Self::Number(_) => "number",
            Self::SingleSelect(_) => "single-select",
            Self::Slider(_) => "continuous-slider",
        }
    }

    pub fn range(&self) -> Option<&NumericRange> {
        match self {
            Self::Number(range) | Self::Slider(range) => Some(range),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            Self::SingleSelect(choices) => Some(choices.as_slice()),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.range().is_some()
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::SecretText)
    }
}

/// Conjunction of exact-equality requirements on other options of the same tool.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibilityCondition {
    requirements: BTreeMap<String, OptionValue>,
}

impl VisibilityCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.requirements.insert(key.into(), value.into());
        self
    }

    pub fn requirements(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.requirements
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.requirements.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    pub key: String,
    pub label: String,
    pub kind: OptionKind,
    pub required: bool,
    pub default: Option<OptionValue>,
    pub visibility: Option<VisibilityCondition>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
}

impl OptionDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            default: None,
            visibility: None,
            placeholder: None,
            help_text: None,
        }
    }

    pub fn short_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, OptionKind::ShortText)
    }

    pub fn long_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, OptionKind::LongText)
    }

    pub fn secret_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, OptionKind::SecretText)
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>, range: NumericRange) -> Self {
        Self::new(key, label, OptionKind::Number(range))
    }

    pub fn select(key: impl Into<String>, label: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(key, label, OptionKind::SingleSelect(choices))
    }

    pub fn slider(key: impl Into<String>, label: impl Into<String>, range: NumericRange) -> Self {
        Self::new(key, label, OptionKind::Slider(range))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Adds one exact-equality requirement to this option's visibility condition.
    pub fn visible_when(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let condition = self.visibility.take().unwrap_or_default();
        self.visibility = Some(condition.when(key, value));
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.visibility
            .as_ref()
            .is_some_and(|condition| !condition.is_empty())
    }
}
