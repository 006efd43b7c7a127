//! Output: serialize a batch result.
//!
//! This is the last stage of the pipeline. The report is the only file the
//! library ever writes.

pub mod report;

pub use report::{render_report, write_report, REPORT_FILE_NAME};
