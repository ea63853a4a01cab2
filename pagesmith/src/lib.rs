//! Unified facade over the pagesmith workspace crates.
//!
//! Applications usually depend on this crate alone. It re-exports the schema,
//! evaluator, session, execution, and result crates and wires them into an
//! [`Engine`] driven by an [`EngineConfig`].
//!
//! ```rust
//! use pagesmith::{Engine, EngineConfig, Phase, ps_pdfs};
//!
//! let engine = Engine::new(EngineConfig::new("https://pdf.example.com"))
//!     .expect("valid configuration");
//!
//! engine
//!     .select_files("rotate-pages", ps_pdfs!["scan.pdf" => b"%PDF".to_vec()])
//!     .expect("one file fits");
//! engine.set_option("rotation", "180").expect("rotation is declared");
//!
//! let view = engine.view().expect("session view");
//! assert_eq!(view.phase, Phase::FilesChosen);
//! assert!(view.can_submit());
//! ```

mod config;
mod error;
mod macros;

pub mod prelude;
pub mod runtime;

pub use pcommon;
pub use pexec;
pub use pform;
pub use pobserve;
pub use presult;
pub use pschema;
pub use psession;

pub use config::{
    BASE_URL_VAR, DEFAULT_TIMEOUT, DOWNLOAD_BASE_URL_VAR, EngineConfig, TIMEOUT_SECS_VAR,
};
pub use error::{EngineError, EngineErrorKind};
pub use pcommon::{BoxFuture, Generation, ToolId};
pub use pexec::{
    DirectoryDownloader, ExecError, ExecErrorKind, ExecutionCoordinator,
    HttpProcessingTransport, NoopSubmissionHooks, ProcessingTransport, SubmissionEvent,
    SubmissionHooks, SubmissionPayload, SubmitOutcome, TransportResponse,
};
pub use pform::{OptionValues, Violation, ViolationReason, is_visible, validate, visible_options};
pub use pobserve::{MetricsSubmissionHooks, SafeSubmissionHooks, TracingSubmissionHooks};
pub use presult::{
    Artifacts, ComparisonReport, CompressionStats, DownloadAffordance, DownloadTrigger, FileLink,
    ProcessingResult, ResultDetails, ResultError, ResultErrorKind, ResultInterpreter, ResultView,
    SignatureInfo, TextPreview,
};
pub use pschema::{
    Choice, ExtraRule, FilePolicy, NumericRange, OptionDefinition, OptionKind, OptionValue,
    SchemaError, SchemaErrorKind, ToolCatalog, ToolCategory, ToolDefinition, VisibilityCondition,
    builtin,
};
pub use psession::{FileHandle, FileSource, Phase, SessionError, SessionErrorKind, SessionView};

pub use runtime::{Engine, EngineBuilder};
