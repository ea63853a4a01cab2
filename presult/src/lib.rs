//! Result interpretation: wire envelope, display view, and download capability.

mod download;
mod envelope;
mod error;
mod interpret;

pub mod prelude {
    pub use crate::{
        Artifacts, DownloadAffordance, DownloadTrigger, FileLink, ProcessingResponse,
        ProcessingResult, ResultDetails, ResultError, ResultErrorKind, ResultInterpreter,
        ResultView, TextPreview,
    };
}

pub use download::DownloadTrigger;
pub use envelope::{
    Artifacts, ComparedFile, ComparisonReport, CompressionStats, Differences, FileLink, Measure,
    ProcessingResponse, ProcessingResult, ResultDetails, SignatureInfo,
};
pub use error::{GENERIC_FAILURE_MESSAGE, ResultError, ResultErrorKind};
pub use interpret::{
    DEFAULT_PREVIEW_MAX_CHARS, DEFAULT_PREVIEW_MAX_LINES, DownloadAffordance, PreviewLimits,
    ResultInterpreter, ResultView, TextPreview, resolve_url,
};
