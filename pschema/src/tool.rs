//! Immutable tool definitions: endpoint, file limits, and ordered options.
//!
//! ```rust
//! use pschema::{FilePolicy, OptionDefinition, ToolCategory, ToolDefinition};
//!
//! let merge = ToolDefinition::new("merge", ToolCategory::Organize, "/api/organize/merge")
//!     .accepting_multiple(10);
//! let compare = ToolDefinition::new("compare", ToolCategory::Security, "/api/security/compare")
//!     .with_max_files(2);
//! let rotate = ToolDefinition::new("rotate-pages", ToolCategory::Edit, "/api/edit/rotate")
//!     .with_option(OptionDefinition::short_text("pages", "Pages").with_default("all"));
//!
//! assert_eq!(merge.file_policy(), FilePolicy::UpTo(10));
//! assert_eq!(compare.file_policy(), FilePolicy::Exactly(2));
//! assert_eq!(rotate.file_field_name(), "file");
//! assert!(rotate.option("pages").is_some());
//! ```

use std::fmt::{Display, Formatter};

use pcommon::ToolId;

use crate::{ExtraRule, OptionDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Organize,
    Edit,
    Security,
    Convert,
}

impl ToolCategory {
    /// Filename used for a download when the service does not name the artifact.
    pub fn fallback_filename(self) -> &'static str {
        match self {
            Self::Organize => "processed-file",
            Self::Edit => "edited-file",
            Self::Security => "secured-file",
            Self::Convert => "converted-file",
        }
    }
}

impl Display for ToolCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Organize => "organize",
            Self::Edit => "edit",
            Self::Security => "security",
            Self::Convert => "convert",
        };

        f.write_str(name)
    }
}

/// One accepted MIME type and the file extensions that map to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypePattern {
    pub mime: String,
    pub extensions: Vec<String>,
}

impl FileTypePattern {
    pub fn new<I, S>(mime: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mime: mime.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn pdf() -> Self {
        Self::new("application/pdf", [".pdf"])
    }

    pub fn matches(&self, file_name: &str, mime: &str) -> bool {
        if self.mime.eq_ignore_ascii_case(mime) {
            return true;
        }

        let lowered = file_name.to_ascii_lowercase();
        self.extensions
            .iter()
            .any(|extension| lowered.ends_with(&extension.to_ascii_lowercase()))
    }
}

/// How many files a tool takes per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolicy {
    Single,
    UpTo(usize),
    Exactly(usize),
}

impl FilePolicy {
    pub fn max_files(self) -> usize {
        match self {
            Self::Single => 1,
            Self::UpTo(max) | Self::Exactly(max) => max,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub id: ToolId,
    pub category: ToolCategory,
    pub title: String,
    pub description: String,
    pub endpoint: String,
    pub max_files: usize,
    pub accepts_multiple: bool,
    pub accepted_file_types: Vec<FileTypePattern>,
    pub options: Vec<OptionDefinition>,
    pub rules: Vec<ExtraRule>,
}

impl ToolDefinition {
    pub fn new(
        id: impl Into<ToolId>,
        category: ToolCategory,
        endpoint: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            title: id.to_string(),
            id,
            category,
            description: String::new(),
            endpoint: endpoint.into(),
            max_files: 1,
            accepts_multiple: false,
            accepted_file_types: vec![FileTypePattern::pdf()],
            options: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Fixed file count when `max_files > 1`; see [`ToolDefinition::accepting_multiple`].
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn accepting_multiple(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self.accepts_multiple = true;
        self
    }

    pub fn with_accepted_types(mut self, accepted_file_types: Vec<FileTypePattern>) -> Self {
        self.accepted_file_types = accepted_file_types;
        self
    }

    pub fn with_option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_rule(mut self, rule: ExtraRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn option(&self, key: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn file_policy(&self) -> FilePolicy {
        if self.max_files <= 1 {
            FilePolicy::Single
        } else if self.accepts_multiple {
            FilePolicy::UpTo(self.max_files)
        } else {
            FilePolicy::Exactly(self.max_files)
        }
    }

    pub fn is_multi_file(&self) -> bool {
        !matches!(self.file_policy(), FilePolicy::Single)
    }

    /// Multipart field name each attached file is sent under.
    pub fn file_field_name(&self) -> &'static str {
        if self.is_multi_file() { "files" } else { "file" }
    }

    pub fn accepts_file(&self, file_name: &str, mime: &str) -> bool {
        self.accepted_file_types.is_empty()
            || self
                .accepted_file_types
                .iter()
                .any(|pattern| pattern.matches(file_name, mime))
    }
}
