//! Submittability checks over a tool, its current values, and the attached
//! file count.
//!
//! Violations are reported in a fixed order: required visible options, kind
//! constraints of visible options, tool-specific rules, then the file-count
//! rule.
//!
//! ```rust
//! use pform::{OptionValues, ViolationReason, validate};
//! use pschema::{ExtraRule, OptionDefinition, ToolCategory, ToolDefinition};
//!
//! let protect = ToolDefinition::new("protect", ToolCategory::Security, "/api/security/protect")
//!     .with_option(OptionDefinition::secret_text("password", "Password").required())
//!     .with_rule(ExtraRule::min_length("password", 4));
//!
//! let values = OptionValues::new().with("password", "abc");
//! let violations = validate(&protect, &values, 1);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].reason, ViolationReason::TooShort);
//! ```

use std::fmt::{Display, Formatter};

use pschema::{ExtraRule, FilePolicy, OptionDefinition, OptionKind, ToolDefinition};

use crate::{OptionValues, is_visible};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    Required,
    NotANumber,
    OutOfRange,
    UnknownChoice,
    TooShort,
    FileCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// `None` for rules that are not tied to a single option.
    pub option_key: Option<String>,
    pub reason: ViolationReason,
    pub message: String,
}

impl Violation {
    pub fn for_option(
        key: impl Into<String>,
        reason: ViolationReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            option_key: Some(key.into()),
            reason,
            message: message.into(),
        }
    }

    pub fn file_count(message: impl Into<String>) -> Self {
        Self {
            option_key: None,
            reason: ViolationReason::FileCount,
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate(tool: &ToolDefinition, values: &OptionValues, file_count: usize) -> Vec<Violation> {
    let visible: Vec<&OptionDefinition> = tool
        .options
        .iter()
        .filter(|option| is_visible(option, values))
        .collect();

    let mut violations = Vec::new();

    for option in &visible {
        if option.required && values.is_blank(&option.key) {
            violations.push(Violation::for_option(
                option.key.as_str(),
                ViolationReason::Required,
                format!("{} is required", option.label),
            ));
        }
    }

    for option in &visible {
        if let Some(violation) = check_kind(option, values) {
            violations.push(violation);
        }
    }

    for rule in &tool.rules {
        if let Some(violation) = check_rule(tool, rule, values) {
            violations.push(violation);
        }
    }

    if let Some(violation) = check_file_count(tool.file_policy(), file_count) {
        violations.push(violation);
    }

    violations
}

fn check_kind(option: &OptionDefinition, values: &OptionValues) -> Option<Violation> {
    let value = values.get(&option.key).filter(|value| !value.is_empty())?;

    match &option.kind {
        OptionKind::Number(range) | OptionKind::Slider(range) => {
            let Some(number) = value.as_number() else {
                return Some(Violation::for_option(
                    option.key.as_str(),
                    ViolationReason::NotANumber,
                    format!("{} must be a number", option.label),
                ));
            };

            if range.contains(number) {
                return None;
            }

            let bounds = match (range.min, range.max) {
                (Some(min), Some(max)) => format!("between {min} and {max}"),
                (Some(min), None) => format!("at least {min}"),
                (None, Some(max)) => format!("at most {max}"),
                (None, None) => return None,
            };

            Some(Violation::for_option(
                option.key.as_str(),
                ViolationReason::OutOfRange,
                format!("{} must be {bounds}", option.label),
            ))
        }
        OptionKind::SingleSelect(choices) => {
            let selected = value.to_form_value();
            if choices.iter().any(|choice| choice.value == selected) {
                return None;
            }

            let allowed: Vec<&str> = choices.iter().map(|choice| choice.value.as_str()).collect();
            Some(Violation::for_option(
                option.key.as_str(),
                ViolationReason::UnknownChoice,
                format!("{} must be one of: {}", option.label, allowed.join(", ")),
            ))
        }
        OptionKind::ShortText | OptionKind::LongText | OptionKind::SecretText => None,
    }
}

fn check_rule(tool: &ToolDefinition, rule: &ExtraRule, values: &OptionValues) -> Option<Violation> {
    match rule {
        ExtraRule::MinLength { key, min, message } => {
            let option = tool.option(key)?;
            if !is_visible(option, values) {
                return None;
            }

            let text = values.get(key).filter(|value| !value.is_empty())?.to_form_value();
            if text.chars().count() >= *min {
                return None;
            }

            let message = message.clone().unwrap_or_else(|| {
                format!("{} must be at least {min} characters long", option.label)
            });
            Some(Violation::for_option(
                key.as_str(),
                ViolationReason::TooShort,
                message,
            ))
        }
    }
}

fn check_file_count(policy: FilePolicy, file_count: usize) -> Option<Violation> {
    match policy {
        FilePolicy::Exactly(expected) if file_count != expected => Some(Violation::file_count(
            format!("Exactly {expected} files are required, {file_count} attached"),
        )),
        FilePolicy::UpTo(max) if file_count > max => Some(Violation::file_count(format!(
            "At most {max} files can be processed, {file_count} attached"
        ))),
        FilePolicy::Single if file_count > 1 => Some(Violation::file_count(format!(
            "Only one file can be processed, {file_count} attached"
        ))),
        _ => None,
    }
}
