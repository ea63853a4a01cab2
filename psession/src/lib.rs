//! Session state for one document-processing screen.

mod error;
mod file;
mod state;
mod view;

pub mod prelude {
    pub use crate::{
        FileHandle, FileSource, Phase, SessionError, SessionErrorKind, SessionState,
        SessionView, SubmissionTicket,
    };
}

pub use error::{SessionError, SessionErrorKind};
pub use file::{FileHandle, FileSource};
pub use state::{Phase, SessionState, SubmissionTicket};
pub use view::{FileSummary, SessionView};
