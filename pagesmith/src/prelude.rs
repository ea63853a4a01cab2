//! Common imports for most pagesmith applications.

pub use crate::{Engine, EngineBuilder, EngineConfig, EngineError, EngineErrorKind};
pub use crate::{ps_pdfs, ps_values};
pub use crate::{
    Artifacts, DirectoryDownloader, DownloadAffordance, DownloadTrigger, ExecError,
    ExecErrorKind, FileHandle, OptionDefinition, OptionKind, OptionValue, OptionValues, Phase,
    ProcessingResult, ProcessingTransport, ResultDetails, ResultView, SessionView, SubmitOutcome,
    ToolCatalog, ToolCategory, ToolDefinition, ToolId, Violation, ViolationReason,
};
