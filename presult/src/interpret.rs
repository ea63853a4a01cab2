//! Maps a successful result into download affordances and display data.
//!
//! ```rust
//! use presult::{Artifacts, FileLink, ProcessingResult, ResultInterpreter};
//!
//! let interpreter = ResultInterpreter::new().with_download_base("https://api.example.com/");
//! let result = ProcessingResult::new("Merged")
//!     .with_artifacts(Artifacts::Single(FileLink::new("/downloads/merged.pdf")));
//!
//! let view = interpreter.interpret(&result, "processed-file");
//! assert_eq!(view.downloads[0].url, "https://api.example.com/downloads/merged.pdf");
//! assert_eq!(view.downloads[0].filename, "processed-file");
//! ```

use crate::{
    ComparedFile, ComparisonReport, CompressionStats, DownloadTrigger, FileLink, Measure,
    ProcessingResult, ResultDetails, ResultError, SignatureInfo,
};

pub const DEFAULT_PREVIEW_MAX_LINES: usize = 12;
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub max_lines: usize,
    pub max_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_PREVIEW_MAX_LINES,
            max_chars: DEFAULT_PREVIEW_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResultInterpreter {
    download_base: Option<String>,
    preview: PreviewLimits,
}

impl ResultInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Origin prefixed to relative download URLs for every tool family.
    pub fn with_download_base(mut self, base: impl Into<String>) -> Self {
        self.download_base = Some(base.into());
        self
    }

    pub fn with_preview_limits(mut self, preview: PreviewLimits) -> Self {
        self.preview = preview;
        self
    }

    pub fn download_base(&self) -> Option<&str> {
        self.download_base.as_deref()
    }

    pub fn interpret(&self, result: &ProcessingResult, fallback_filename: &str) -> ResultView {
        let downloads = result
            .artifacts
            .links()
            .iter()
            .map(|link| self.affordance(link, fallback_filename))
            .collect();

        let (text_preview, confidence) = match &result.details {
            Some(ResultDetails::ExtractedText { text, confidence }) => {
                (Some(TextPreview::bounded(text, self.preview)), *confidence)
            }
            _ => (None, None),
        };

        ResultView {
            message: result.message.clone(),
            downloads,
            text_preview,
            confidence,
            details: result.details.clone(),
        }
    }

    pub fn resolve_url(&self, url: &str) -> String {
        resolve_url(self.download_base.as_deref(), url)
    }

    fn affordance(&self, link: &FileLink, fallback_filename: &str) -> DownloadAffordance {
        let filename = link
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback_filename);

        DownloadAffordance {
            url: self.resolve_url(&link.download_url),
            filename: filename.to_string(),
        }
    }
}

/// Absolute URLs pass through untouched; relative ones are joined to `base`.
pub fn resolve_url(base: Option<&str>, url: &str) -> String {
    let url = url.trim();
    let is_absolute = url.starts_with("http://") || url.starts_with("https://");

    match base {
        Some(base) if !is_absolute && !base.trim().is_empty() => format!(
            "{}/{}",
            base.trim().trim_end_matches('/'),
            url.trim_start_matches('/')
        ),
        _ => url.to_string(),
    }
}

/// One independently triggerable download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAffordance {
    pub url: String,
    pub filename: String,
}

impl DownloadAffordance {
    /// Each call repeats the fetch of the same URL.
    pub async fn trigger(&self, trigger: &dyn DownloadTrigger) -> Result<(), ResultError> {
        trigger.trigger_download(&self.url, &self.filename).await
    }
}

/// Bounded-height view of extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    pub text: String,
    pub truncated: bool,
    pub total_chars: usize,
}

impl TextPreview {
    pub fn bounded(text: &str, limits: PreviewLimits) -> Self {
        let total_chars = text.chars().count();
        let mut preview = String::new();
        let mut truncated = false;

        for (index, line) in text.lines().enumerate() {
            if index >= limits.max_lines {
                truncated = true;
                break;
            }

            if index > 0 {
                preview.push('\n');
            }

            let remaining = limits.max_chars.saturating_sub(preview.chars().count());
            if line.chars().count() > remaining {
                preview.extend(line.chars().take(remaining));
                truncated = true;
                break;
            }

            preview.push_str(line);
        }

        Self {
            text: preview,
            truncated,
            total_chars,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub message: String,
    pub downloads: Vec<DownloadAffordance>,
    pub text_preview: Option<TextPreview>,
    pub confidence: Option<f64>,
    pub details: Option<ResultDetails>,
}

impl ResultView {
    /// True when the result offers nothing to download.
    pub fn is_informational(&self) -> bool {
        self.downloads.is_empty()
    }

    pub fn confidence_label(&self) -> Option<String> {
        self.confidence
            .map(|confidence| format!("OCR Confidence: {confidence:.1}%"))
    }

    /// Human-readable lines for the informational details.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(label) = self.confidence_label() {
            lines.push(label);
        }

        match &self.details {
            Some(ResultDetails::Compression(stats)) => lines.push(compression_line(stats)),
            Some(ResultDetails::Comparison(report)) => lines.extend(comparison_lines(report)),
            Some(ResultDetails::Signature(signature)) => lines.extend(signature_lines(signature)),
            Some(ResultDetails::ExtractedText { .. }) | None => {}
        }

        lines
    }
}

fn render(value: Option<&Measure>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

fn compression_line(stats: &CompressionStats) -> String {
    format!(
        "Original: {} → Compressed: {} (Saved {})",
        render(stats.original_size.as_ref()),
        render(stats.compressed_size.as_ref()),
        render(stats.saved_space.as_ref())
    )
}

fn describe_file(label: &str, file: &ComparedFile) -> String {
    let mut facts = Vec::new();
    if let Some(pages) = &file.pages {
        facts.push(format!("{pages} pages"));
    }
    if let Some(size) = &file.size {
        facts.push(size.to_string());
    }

    if facts.is_empty() {
        format!("{label}: {}", file.name)
    } else {
        format!("{label}: {} ({})", file.name, facts.join(", "))
    }
}

fn comparison_lines(report: &ComparisonReport) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(file) = &report.file1 {
        lines.push(describe_file("File 1", file));
    }
    if let Some(file) = &report.file2 {
        lines.push(describe_file("File 2", file));
    }

    let differences = &report.differences;
    if differences.identical == Some(true) {
        lines.push("Files appear identical".to_string());
    } else if differences.identical.is_some()
        || differences.page_count_diff.is_some()
        || differences.size_diff.is_some()
    {
        lines.push(format!(
            "Page count differs: {}, Size differs: {}",
            render(differences.page_count_diff.as_ref()),
            render(differences.size_diff.as_ref())
        ));
    }

    lines
}

fn signature_lines(signature: &SignatureInfo) -> Vec<String> {
    let mut lines = Vec::new();
    if !signature.name.is_empty() {
        lines.push(format!("Signed by: {}", signature.name));
    }
    if !signature.reason.is_empty() {
        lines.push(format!("Reason: {}", signature.reason));
    }
    if !signature.timestamp.is_empty() {
        lines.push(format!("Date: {}", signature.timestamp));
    }
    lines
}
