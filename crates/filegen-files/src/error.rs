//! Error types for document writing

use std::path::{Path, PathBuf};

/// Errors that can occur while writing a document
///
/// Every variant names the destination it failed on.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The contents could not be persisted
    #[error("Failed to write file to {}: {source}", .path.display())]
    WriteFailed {
        /// Intended destination
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The destination is read-only and unlocking was not requested
    #[error("Failed to write file to {}: destination is not writable", .0.display())]
    NotWritable(PathBuf),

    /// Permissions could not be changed
    #[error("Failed to set attributes on {}: {source}", .path.display())]
    AttributesFailed {
        /// File whose attributes were being changed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Original permissions could not be put back after an unlock
    #[error("Failed to restore attributes on {}: {source}", .path.display())]
    RestoreFailed {
        /// File whose attributes were being restored
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

impl FileError {
    /// Destination the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            FileError::WriteFailed { path, .. }
            | FileError::AttributesFailed { path, .. }
            | FileError::RestoreFailed { path, .. } => path,
            FileError::NotWritable(path) => path,
        }
    }
}
