//! Submission execution: payload assembly, transport, and the single-flight
//! coordinator.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pcommon::BoxFuture;
//! use pexec::{
//!     ExecError, ExecutionCoordinator, ProcessingTransport, SubmissionPayload, TransportResponse,
//! };
//! use psession::FileHandle;
//! use pschema::builtin;
//!
//! #[derive(Debug)]
//! struct Canned;
//!
//! impl ProcessingTransport for Canned {
//!     fn submit<'a>(
//!         &'a self,
//!         _payload: SubmissionPayload,
//!     ) -> BoxFuture<'a, Result<TransportResponse, ExecError>> {
//!         Box::pin(async move {
//!             Ok(TransportResponse::json(200, r#"{"success":true,"message":"Compressed"}"#))
//!         })
//!     }
//! }
//!
//! let catalog = builtin::catalog().expect("built-in tools are well formed");
//! let coordinator = ExecutionCoordinator::new(Arc::new(Canned));
//! coordinator
//!     .select_files(
//!         catalog.require("compress").expect("compress is built in"),
//!         vec![FileHandle::pdf("big.pdf", b"%PDF".to_vec())],
//!     )
//!     .expect("one file fits");
//!
//! let _pending = coordinator.submit();
//! ```

mod coordinator;
mod download;
mod error;
mod hooks;
mod payload;
mod transport;

pub mod prelude {
    pub use crate::{
        DirectoryDownloader, ExecError, ExecErrorKind, ExecutionCoordinator,
        HttpProcessingTransport, NoopSubmissionHooks, ProcessingTransport, SubmissionEvent,
        SubmissionHooks, SubmissionPayload, SubmitOutcome, TransportResponse,
    };
}

pub use coordinator::{ExecutionCoordinator, ExecutionCoordinatorBuilder, SubmitOutcome};
pub use download::{DEFAULT_DOWNLOAD_NAME, DirectoryDownloader};
pub use error::{ExecError, ExecErrorKind, GENERIC_TRANSPORT_MESSAGE};
pub use hooks::{NoopSubmissionHooks, SubmissionEvent, SubmissionHooks};
pub use payload::SubmissionPayload;
pub use transport::{HttpProcessingTransport, ProcessingTransport, TransportResponse};
