//! Capability for fetching one download artifact on user request.
//!
//! ```rust
//! use std::sync::Mutex;
//!
//! use pcommon::BoxFuture;
//! use presult::{DownloadTrigger, ResultError};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     fetched: Mutex<Vec<String>>,
//! }
//!
//! impl DownloadTrigger for Recorder {
//!     fn trigger_download<'a>(
//!         &'a self,
//!         url: &'a str,
//!         _filename: &'a str,
//!     ) -> BoxFuture<'a, Result<(), ResultError>> {
//!         Box::pin(async move {
//!             self.fetched.lock().expect("recorder lock").push(url.to_string());
//!             Ok(())
//!         })
//!     }
//! }
//!
//! let _recorder = Recorder::default();
//! ```

use pcommon::BoxFuture;

use crate::ResultError;

pub trait DownloadTrigger: Send + Sync {
    /// Fetches `url` and hands it to the user under `filename`.
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        filename: &'a str,
    ) -> BoxFuture<'a, Result<(), ResultError>>;
}
