//! Wire envelope returned by the processing service and its typed form.
//!
//! ```rust
//! use presult::{Artifacts, ProcessingResponse};
//!
//! let body = br#"{"success":true,"message":"Rotated","downloadUrl":"/downloads/r.pdf","filename":"r.pdf"}"#;
//! let result = ProcessingResponse::from_slice(body)
//!     .and_then(ProcessingResponse::into_result)
//!     .expect("success envelope");
//!
//! assert_eq!(result.message, "Rotated");
//! assert!(matches!(result.artifacts, Artifacts::Single(_)));
//! ```

use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{GENERIC_FAILURE_MESSAGE, ResultError};

/// A scalar the service reports either as a number, a flag, or preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl Display for Measure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLink {
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl FileLink {
    pub fn new(download_url: impl Into<String>) -> Self {
        Self {
            download_url: download_url.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

// Detail fields are informational and any of them may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressionStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_size: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_space: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparedFile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Differences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count_diff: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_diff: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file1: Option<ComparedFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file2: Option<ComparedFile>,
    pub differences: Differences,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureInfo {
    pub name: String,
    pub reason: String,
    pub timestamp: String,
}

/// Keeps the envelope usable when a detail block has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// JSON body exactly as the service sends it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub compression: Option<CompressionStats>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub comparison: Option<ComparisonReport>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<SignatureInfo>,
}

impl ProcessingResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, ResultError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Server-supplied error text, if the body carries one.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    /// Splits the envelope into a typed success or an application error.
    pub fn into_result(self) -> Result<ProcessingResult, ResultError> {
        if !self.success {
            let message = self.error_message().unwrap_or(GENERIC_FAILURE_MESSAGE);
            return Err(ResultError::application(message));
        }

        let artifacts = match (self.files, self.download_url) {
            (Some(files), _) if !files.is_empty() => Artifacts::Multiple(files),
            (_, Some(url)) if !url.trim().is_empty() => Artifacts::Single(FileLink {
                download_url: url,
                filename: self.filename,
            }),
            _ => Artifacts::None,
        };

        let details = if let Some(text) = self.extracted_text {
            Some(ResultDetails::ExtractedText {
                text,
                confidence: self.confidence,
            })
        } else if let Some(stats) = self.compression {
            Some(ResultDetails::Compression(stats))
        } else if let Some(report) = self.comparison {
            Some(ResultDetails::Comparison(report))
        } else {
            self.signature.map(ResultDetails::Signature)
        };

        Ok(ProcessingResult {
            message: self.message.unwrap_or_default(),
            artifacts,
            details,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Artifacts {
    None,
    Single(FileLink),
    Multiple(Vec<FileLink>),
}

impl Artifacts {
    pub fn links(&self) -> &[FileLink] {
        match self {
            Self::None => &[],
            Self::Single(link) => std::slice::from_ref(link),
            Self::Multiple(links) => links.as_slice(),
        }
    }
}

/// Informational payload shown alongside or instead of downloads.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultDetails {
    ExtractedText {
        text: String,
        confidence: Option<f64>,
    },
    Compression(CompressionStats),
    Comparison(ComparisonReport),
    Signature(SignatureInfo),
}

/// A successful processing outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    pub message: String,
    pub artifacts: Artifacts,
    pub details: Option<ResultDetails>,
}

impl ProcessingResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            artifacts: Artifacts::None,
            details: None,
        }
    }

    pub fn with_artifacts(mut self, artifacts: Artifacts) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn with_details(mut self, details: ResultDetails) -> Self {
        self.details = Some(details);
        self
    }
}
