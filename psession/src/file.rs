//! File handles supplied by the file picker.

use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Memory(Arc<[u8]>),
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub source: FileSource,
}

impl FileHandle {
    pub fn from_bytes(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime: mime.into(),
            source: FileSource::Memory(Arc::from(bytes)),
        }
    }

    /// `size` is taken on trust from the picker; the file is read at submit time.
    pub fn from_path(
        name: impl Into<String>,
        mime: impl Into<String>,
        size: u64,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            source: FileSource::Path(path.into()),
        }
    }

    pub fn pdf(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_bytes(name, "application/pdf", bytes)
    }
}
