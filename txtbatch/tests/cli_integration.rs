//! Integration tests for txtbatch CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_txtbatch(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "txtbatch", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_txtbatch(&["--help"]);

    assert!(success);
    assert!(stdout.contains("txtbatch"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--include"));
    assert!(stdout.contains("--unsorted"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_txtbatch(&["--version"]);

    assert!(success);
    assert!(stdout.contains("txtbatch"));
}

#[test]
fn test_text_output_and_report() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("a.txt"), "x\ny\n").unwrap();
    fs::write(input.path().join("b.txt"), "").unwrap();

    let (stdout, _, success) = run_txtbatch(&[path_str(input.path()), path_str(output.path())]);

    assert!(success);
    assert!(stdout.contains("Processed: a.txt (2 lines)"));
    assert!(stdout.contains("Processed: b.txt (0 lines)"));
    assert!(stdout.contains("Success: 2, Failed: 0, Total: 2"));

    let report = fs::read_to_string(output.path().join("results.txt")).unwrap();
    assert!(report.starts_with("=== BATCH FILE PROCESSING RESULTS ===\n"));
    assert!(report.contains("Total Files Found: 2\n"));
    assert!(report.contains("File: a.txt\nLines: 2\nStatus: Processed successfully\n"));
}

#[test]
fn test_run_subcommand() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("only.txt"), "1\n2\n3").unwrap();

    let (stdout, _, success) =
        run_txtbatch(&["run", path_str(input.path()), path_str(output.path())]);

    assert!(success);
    assert!(stdout.contains("Processed: only.txt (3 lines)"));
    assert!(output.path().join("results.txt").exists());
}

#[test]
fn test_json_output() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("a.txt"), "x\n").unwrap();
    fs::create_dir(input.path().join("broken.txt")).unwrap();

    let (stdout, _, success) = run_txtbatch(&[
        path_str(input.path()),
        path_str(output.path()),
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["total_found"], 2);
    assert_eq!(parsed["processed_count"], 2);
    assert_eq!(parsed["reports"][0]["file_name"], "a.txt");
    assert_eq!(parsed["reports"][0]["line_count"], 1);
    assert_eq!(parsed["reports"][1]["status"], "Error");
}

#[test]
fn test_empty_input() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let (stdout, _, success) = run_txtbatch(&[path_str(input.path()), path_str(output.path())]);

    assert!(success);
    assert!(stdout.contains("No TXT files found"));
    let report = fs::read_to_string(output.path().join("results.txt")).unwrap();
    assert!(report.contains("Total Files Found: 0"));
}

#[test]
fn test_exclude_flag() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("keep.txt"), "k\n").unwrap();
    fs::write(input.path().join("draft_1.txt"), "d\n").unwrap();

    let (stdout, _, success) = run_txtbatch(&[
        path_str(input.path()),
        path_str(output.path()),
        "--exclude",
        "draft_*",
    ]);

    assert!(success);
    assert!(stdout.contains("keep.txt"));
    assert!(!stdout.contains("draft_1.txt"));
}

#[test]
fn test_invalid_input_path() {
    let output = tempdir().unwrap();

    let (_, stderr, success) = run_txtbatch(&["/nonexistent/path", path_str(output.path())]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!output.path().join("results.txt").exists());
}

#[test]
fn test_invalid_output_path() {
    let input = tempdir().unwrap();

    let (_, stderr, success) = run_txtbatch(&[path_str(input.path()), "/nonexistent/out"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
