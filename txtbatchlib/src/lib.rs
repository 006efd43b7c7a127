//! # txtbatchlib
//!
//! Batch line counting for folders of text files.
//!
//! ## Overview
//!
//! Given an input folder and an output folder, the library finds every
//! `.txt` entry directly inside the input folder, counts the lines of each
//! one and writes a consolidated `results.txt` report into the output
//! folder. A file that cannot be read is recorded as an error in the report
//! and never stops the rest of the batch.
//!
//! The work is split in three stages:
//!
//! - **source**: discover candidate files (sorted by name, optional globs)
//! - **data**: read and count each file, assemble a [`BatchResult`]
//! - **output**: render and write the report
//!
//! ## Line counting
//!
//! Every `'\n'` ends a line; a final segment without a trailing newline
//! still counts. An empty file has zero lines.
//!
//! ## Example
//!
//! ```rust
//! use txtbatchlib::{generate_with_options, FileStatus, GenerateOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let input = tempdir().unwrap();
//! let output = tempdir().unwrap();
//! fs::write(input.path().join("a.txt"), "x\ny\n").unwrap();
//! fs::write(input.path().join("b.txt"), "").unwrap();
//!
//! let options = GenerateOptions::new().timestamp("Fri Oct 16 09:30:00 UTC 2026");
//! let result = generate_with_options(input.path(), output.path(), &options).unwrap();
//!
//! assert_eq!(result.total_found, 2);
//! assert_eq!(result.reports[0].line_count, Some(2));
//! assert_eq!(result.reports[1].status, FileStatus::Success);
//!
//! let report = fs::read_to_string(output.path().join("results.txt")).unwrap();
//! assert!(report.contains("Total Files Found: 2"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    count_lines, generate, generate_with_options, generate_with_progress, process_directory,
    process_file, read_text, spawn_generate, BatchEvent, BatchHandle, BatchResult, FileReport,
    FileStatus, GenerateOptions,
};
pub use error::TxtBatchError;
pub use output::{render_report, write_report, REPORT_FILE_NAME};
pub use source::{discover_files, FilterConfig, TXT_SUFFIX};

/// Result type for txtbatchlib operations
pub type Result<T> = std::result::Result<T, TxtBatchError>;
