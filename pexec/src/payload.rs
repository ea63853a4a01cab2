//! Transport-neutral description of one multipart submission.
//!
//! ```rust
//! use pexec::SubmissionPayload;
//! use pform::OptionValues;
//! use psession::FileHandle;
//! use pschema::{OptionDefinition, ToolCategory, ToolDefinition};
//!
//! let rotate = ToolDefinition::new("rotate-pages", ToolCategory::Edit, "/api/edit/rotate")
//!     .with_option(OptionDefinition::short_text("rotation", "Rotation").with_default("90"))
//!     .with_option(OptionDefinition::short_text("pages", "Pages").with_default("all"));
//! let files = vec![FileHandle::pdf("scan.pdf", b"%PDF".to_vec())];
//!
//! let payload = SubmissionPayload::build(&rotate, &files, &OptionValues::seeded(&rotate));
//! assert_eq!(payload.endpoint, "/api/edit/rotate");
//! assert_eq!(payload.file_field, "file");
//! assert_eq!(payload.field("rotation"), Some("90"));
//! ```

use pform::OptionValues;
use psession::FileHandle;
use pschema::ToolDefinition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub endpoint: String,
    /// `file` for single-file tools, `files` repeated once per file otherwise.
    pub file_field: &'static str,
    pub files: Vec<FileHandle>,
    /// Every stored option value, hidden ones included, stringified.
    pub fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn build(tool: &ToolDefinition, files: &[FileHandle], values: &OptionValues) -> Self {
        Self {
            endpoint: tool.endpoint.clone(),
            file_field: tool.file_field_name(),
            files: files.to_vec(),
            fields: values
                .in_schema_order(tool)
                .map(|(key, value)| (key.to_string(), value.to_form_value()))
                .collect(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name.as_str()).collect()
    }
}
