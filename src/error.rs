// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Durable key-value storage failures. Logged, never shown to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("stored record `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage unavailable for key `{0}`")]
    Unavailable(String),
}

/// Failures talking to the page host (reading or running inside a page).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("could not read page {}: {source}", .path.display())]
    ReadPage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("page {0} is no longer available")]
    PageGone(u32),
}

/// File-save failures during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
