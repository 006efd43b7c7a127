//! High-level batch API.
//!
//! This module provides the main entry points for turning an input folder of
//! text files into a `results.txt` report.

use std::path::Path;

use chrono::Local;

use crate::data::counter::process_file;
use crate::data::stats::{BatchResult, FileReport};
use crate::error::TxtBatchError;
use crate::output::write_report;
use crate::source::{discover_files, FilterConfig};
use crate::Result;

/// `date(1)`-style local timestamp used in the report header.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Process files in file-name order (otherwise filesystem order)
    pub sorted: bool,
    /// Fixed report timestamp (None = current local time)
    pub timestamp: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            file_filter: FilterConfig::default(),
            sorted: true,
            timestamp: None,
        }
    }
}

impl GenerateOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Keep filesystem enumeration order instead of sorting by name.
    pub fn unsorted(mut self) -> Self {
        self.sorted = false;
        self
    }

    /// Pin the timestamp written into the report header.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    fn resolve_timestamp(&self) -> String {
        self.timestamp
            .clone()
            .unwrap_or_else(|| Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Process every text file of `input_dir` without writing anything.
///
/// The returned result has an empty `output_path`.
pub fn process_directory(
    input_dir: impl AsRef<Path>,
    options: &GenerateOptions,
) -> Result<BatchResult> {
    process_directory_with_progress(input_dir, options, |_| {})
}

fn process_directory_with_progress<F>(
    input_dir: impl AsRef<Path>,
    options: &GenerateOptions,
    mut on_file: F,
) -> Result<BatchResult>
where
    F: FnMut(&FileReport),
{
    let input_dir = input_dir.as_ref();
    let files = discover_files(input_dir, &options.file_filter, options.sorted)?;

    let mut result = BatchResult::new(input_dir.to_string_lossy(), options.resolve_timestamp());
    result.total_found = files.len();

    if result.is_empty() {
        tracing::info!(input = %input_dir.display(), "no txt files found in input folder");
        return Ok(result);
    }

    tracing::info!(count = files.len(), "starting to process files");

    for path in files {
        let report = process_file(&path);
        on_file(&report);
        result.push(report);
    }

    Ok(result)
}

/// Generate `results.txt` for `input_dir` inside `output_dir` with default
/// options.
///
/// # Example
///
/// ```rust,ignore
/// use txtbatchlib::generate;
///
/// let result = generate("inbox/", "reports/")?;
/// println!("{} of {} files processed", result.processed_count, result.total_found);
/// ```
pub fn generate(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<BatchResult> {
    generate_with_options(input_dir, output_dir, &GenerateOptions::new())
}

/// Generate the report with explicit options.
pub fn generate_with_options(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: &GenerateOptions,
) -> Result<BatchResult> {
    generate_with_progress(input_dir, output_dir, options, |_| {})
}

/// Generate the report, calling `on_file` after each file is processed.
///
/// Both folders are checked before any file is touched: the input folder
/// first, then the output folder. Per-file read failures are recorded in the
/// report; only a failure to write the report itself ends the run with an
/// error.
pub fn generate_with_progress<F>(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: &GenerateOptions,
    on_file: F,
) -> Result<BatchResult>
where
    F: FnMut(&FileReport),
{
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    if !input_dir.is_dir() {
        return Err(TxtBatchError::InputNotFound(input_dir.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(TxtBatchError::OutputNotFound(output_dir.to_path_buf()));
    }

    let mut result = process_directory_with_progress(input_dir, options, on_file)?;
    result.output_path = output_dir.to_string_lossy().to_string();

    write_report(&result, output_dir)?;

    tracing::info!(
        processed = result.processed_count,
        succeeded = result.success_count(),
        failed = result.error_count(),
        total = result.total_found,
        "processing complete"
    );

    Ok(result)
}
