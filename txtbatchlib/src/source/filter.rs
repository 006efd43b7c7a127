//! Text file discovery with glob pattern support.
//!
//! Discovery is non-recursive: only the direct entries of the input folder
//! are considered, and only those whose name ends with `.txt`.

use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::TxtBatchError;
use crate::Result;

/// Suffix an entry name must carry to be picked up (case-sensitive).
pub const TXT_SUFFIX: &str = ".txt";

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include every .txt entry)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all .txt entries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if an entry name matches the filter criteria.
    ///
    /// A name matches if:
    /// 1. It ends with `.txt`
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, name: &str) -> bool {
        if !name.ends_with(TXT_SUFFIX) {
            return false;
        }

        if self.exclude.iter().any(|p| p.matches(name)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(name))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| TxtBatchError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Discover candidate text files directly inside `root`.
///
/// Every entry whose name passes the filter is returned, whatever its type:
/// a directory or a dangling link named `notes.txt` is still a candidate and
/// fails later, when it is read. With `sorted` the entries come back in
/// lexicographic file-name order, otherwise in filesystem order.
pub fn discover_files(
    root: impl AsRef<Path>,
    filter: &FilterConfig,
    sorted: bool,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(TxtBatchError::InputNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // The folder itself could not be listed
            Err(e) if e.depth() == 0 => return Err(io::Error::from(e).into()),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if filter.matches(&name) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), found = files.len(), "discovered text files");

    Ok(files)
}
