//! Plain-text `results.txt` report.
//!
//! Layout:
//!
//! ```text
//! === BATCH FILE PROCESSING RESULTS ===
//! Processing Date: <timestamp>
//! Input Folder: <input_path>
//! Output Folder: <output_path>
//! Total Files Found: <N>
//! ==================================================
//!
//! File: a.txt
//! Lines: 2
//! Status: Processed successfully
//! ------------------------------
//! File: b.txt
//! Status: ERROR - <message>
//! ------------------------------
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::stats::{BatchResult, FileReport, FileStatus};
use crate::error::TxtBatchError;
use crate::Result;

/// Name of the report written into the output folder.
pub const REPORT_FILE_NAME: &str = "results.txt";

const REPORT_TITLE: &str = "=== BATCH FILE PROCESSING RESULTS ===";
const HEADER_RULE_WIDTH: usize = 50;
const BLOCK_RULE_WIDTH: usize = 30;

/// Render a batch result in the report format.
pub fn render_report(result: &BatchResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "Processing Date: {}", result.timestamp);
    let _ = writeln!(out, "Input Folder: {}", result.input_path);
    let _ = writeln!(out, "Output Folder: {}", result.output_path);
    let _ = writeln!(out, "Total Files Found: {}", result.total_found);
    let _ = writeln!(out, "{}", "=".repeat(HEADER_RULE_WIDTH));
    out.push('\n');

    for report in &result.reports {
        render_block(&mut out, report);
    }

    out
}

fn render_block(out: &mut String, report: &FileReport) {
    let _ = writeln!(out, "File: {}", report.file_name);
    match report.status {
        FileStatus::Success => {
            let _ = writeln!(out, "Lines: {}", report.line_count.unwrap_or_default());
            let _ = writeln!(out, "Status: Processed successfully");
        }
        FileStatus::Error => {
            let _ = writeln!(
                out,
                "Status: ERROR - {}",
                report.error_message.as_deref().unwrap_or("unknown error")
            );
        }
    }
    let _ = writeln!(out, "{}", "-".repeat(BLOCK_RULE_WIDTH));
}

/// Write `results.txt` into `output_dir`, replacing any previous report.
///
/// Returns the path of the written file.
pub fn write_report(result: &BatchResult, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if !output_dir.is_dir() {
        return Err(TxtBatchError::OutputNotFound(output_dir.to_path_buf()));
    }

    let path = output_dir.join(REPORT_FILE_NAME);
    fs::write(&path, render_report(result)).map_err(|source| TxtBatchError::ReportWrite {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "results saved");
    Ok(path)
}
