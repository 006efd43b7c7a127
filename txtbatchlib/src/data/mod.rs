//! Data collection: process files and assemble the batch result.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Statistics**: result types (`FileReport`, `BatchResult`)
//! - **Counting**: line counting and per-file processing
//! - **Generation**: the batch entry points (`generate`, `process_directory`)
//! - **Background runs**: `spawn_generate` with a progress channel
//!
//! ## Example
//!
//! ```rust,ignore
//! use txtbatchlib::data::{generate_with_options, GenerateOptions};
//!
//! let result = generate_with_options("inbox/", "reports/", &GenerateOptions::new())?;
//! println!("Total lines: {}", result.total_lines());
//! ```

pub mod counter;
pub mod generator;
pub mod stats;
pub mod worker;

pub use counter::{count_lines, process_file, read_text};
pub use generator::{
    generate, generate_with_options, generate_with_progress, process_directory, GenerateOptions,
};
pub use stats::{BatchResult, FileReport, FileStatus};
pub use worker::{spawn_generate, BatchEvent, BatchHandle};
