//! Result types for a batch run.
//!
//! A batch produces one [`FileReport`] per discovered entry and a single
//! [`BatchResult`] wrapping them together with the run's header data.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Success,
    Error,
}

/// Per-file outcome record.
///
/// `line_count` is set exactly when the status is `Success`, and
/// `error_message` exactly when it is `Error`; use the constructors to keep
/// it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Bare file name (no directory)
    pub file_name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Number of lines, for successfully read files
    pub line_count: Option<u64>,
    pub status: FileStatus,
    /// Human-readable read failure, for failed files
    pub error_message: Option<String>,
}

impl FileReport {
    /// A successfully processed file.
    pub fn success(path: impl Into<PathBuf>, line_count: u64) -> Self {
        let path = path.into();
        Self {
            file_name: file_name_of(&path),
            path,
            line_count: Some(line_count),
            status: FileStatus::Success,
            error_message: None,
        }
    }

    /// A file that could not be processed.
    pub fn error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            file_name: file_name_of(&path),
            path,
            line_count: None,
            status: FileStatus::Error,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Success
    }
}

fn file_name_of(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of candidate entries discovered in the input folder
    pub total_found: usize,
    /// Number of entries attempted (successes and errors alike)
    pub processed_count: usize,
    /// Per-file reports, in processing order
    pub reports: Vec<FileReport>,
    pub input_path: String,
    pub output_path: String,
    /// When the batch ran, as written into the report header
    pub timestamp: String,
}

impl BatchResult {
    /// Create an empty result for the given input folder.
    pub fn new(input_path: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }

    /// Record the outcome of one file.
    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
        self.processed_count += 1;
    }

    /// True when the input folder held nothing to process.
    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }

    pub fn success_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_success()).count()
    }

    /// Sum of line counts over successfully processed files.
    pub fn total_lines(&self) -> u64 {
        self.reports.iter().filter_map(|r| r.line_count).sum()
    }
}
