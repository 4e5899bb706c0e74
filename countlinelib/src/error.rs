//! Error types for countlinelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting lines.
///
/// Every variant aborts the run: there is no per-file recovery.
#[derive(Error, Debug)]
pub enum CountlineError {
    /// Failed to open or decode a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or write the report file
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed (permission denied, broken symlink, loop)
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A matched file's path cannot be written to the UTF-8 report
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}
