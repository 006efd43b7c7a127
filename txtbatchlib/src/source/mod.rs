//! Source discovery: find text files to process.
//!
//! This module handles the first stage of the pipeline - deciding which
//! entries of the input folder take part in a batch.
//!
//! ## Example
//!
//! ```rust,ignore
//! use txtbatchlib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("draft_*")?;
//! let files = discover_files("inbox/", &filter, true)?;
//! ```

pub mod filter;

pub use filter::{discover_files, FilterConfig, TXT_SUFFIX};
