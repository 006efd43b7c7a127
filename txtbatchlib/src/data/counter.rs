//! Per-file processing: read a text file and count its lines.

use std::fs;
use std::path::Path;

use crate::data::stats::FileReport;
use crate::error::TxtBatchError;
use crate::Result;

/// Count lines in `content`.
///
/// Every `'\n'` ends a line, and a trailing segment without a final newline
/// counts as one more line. An empty string has no lines, so `"a\nb\nc"`
/// and `"a\nb\nc\n"` both have 3.
pub fn count_lines(content: &str) -> u64 {
    let breaks = content.bytes().filter(|&b| b == b'\n').count() as u64;
    if content.is_empty() || content.ends_with('\n') {
        breaks
    } else {
        breaks + 1
    }
}

/// Read a whole file as UTF-8 text.
///
/// The file handle is closed before this returns, on success and on error.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| TxtBatchError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Process a single entry into a [`FileReport`].
///
/// Never fails: a read error becomes an `Error` report carrying the error
/// description, so the caller can move on to the next file.
pub fn process_file(path: impl AsRef<Path>) -> FileReport {
    let path = path.as_ref();
    match read_text(path) {
        Ok(content) => {
            let lines = count_lines(&content);
            tracing::debug!(path = %path.display(), lines, "processed file");
            FileReport::success(path, lines)
        }
        Err(TxtBatchError::FileRead { source, .. }) => {
            tracing::warn!(path = %path.display(), error = %source, "failed to process file");
            FileReport::error(path, source.to_string())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to process file");
            FileReport::error(path, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::FileStatus;
    use tempfile::tempdir;

    #[test]
    fn test_count_lines_empty() {
        assert_eq!(count_lines(""), 0);
    }

    #[test]
    fn test_count_lines_without_trailing_newline() {
        assert_eq!(count_lines("a\nb\nc"), 3);
        assert_eq!(count_lines("single"), 1);
    }

    #[test]
    fn test_count_lines_with_trailing_newline() {
        assert_eq!(count_lines("x\ny\n"), 2);
        assert_eq!(count_lines("\n"), 1);
        assert_eq!(count_lines("\n\n\n"), 3);
    }

    #[test]
    fn test_count_lines_crlf() {
        assert_eq!(count_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_lines("a\r\nb"), 2);
    }

    #[test]
    fn test_process_file_success() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "one\ntwo\nthree\n").unwrap();

        let report = process_file(&file);
        assert_eq!(report.file_name, "notes.txt");
        assert_eq!(report.line_count, Some(3));
        assert_eq!(report.status, FileStatus::Success);
    }

    #[test]
    fn test_process_file_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("binary.txt");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let report = process_file(&file);
        assert_eq!(report.status, FileStatus::Error);
        assert!(report.line_count.is_none());
        assert!(report.error_message.unwrap().contains("UTF-8"));
    }

    #[test]
    fn test_process_file_missing() {
        let temp = tempdir().unwrap();
        let report = process_file(temp.path().join("gone.txt"));
        assert_eq!(report.status, FileStatus::Error);
        assert_eq!(report.file_name, "gone.txt");
    }

    #[test]
    fn test_read_text_error_carries_path() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("gone.txt");

        let err = read_text(&missing).unwrap_err();
        assert!(matches!(err, TxtBatchError::FileRead { ref path, .. } if *path == missing));
    }
}
