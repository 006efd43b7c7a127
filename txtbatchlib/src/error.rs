//! Error types for txtbatchlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a batch report
#[derive(Error, Debug)]
pub enum TxtBatchError {
    /// Input folder does not exist (or is not a directory)
    #[error("input folder does not exist: {0}")]
    InputNotFound(PathBuf),

    /// Output folder does not exist (or is not a directory)
    #[error("output folder does not exist: {0}")]
    OutputNotFound(PathBuf),

    /// Failed to read a text file.
    ///
    /// Never returned by the batch loop itself: per-file failures are
    /// recorded in the report instead.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the results report
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Background worker stopped without reporting a result
    #[error("batch worker failed: {0}")]
    Worker(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
