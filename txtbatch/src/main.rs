//! # txtbatch
//!
//! A CLI tool that counts lines in every `.txt` file of a folder and writes
//! a `results.txt` report.
//!
//! ## Overview
//!
//! txtbatch is built on top of txtbatchlib. It takes an input folder and an
//! output folder, processes the text files one at a time and prints a short
//! summary, while the full report goes to `<OUTPUT>/results.txt`.
//!
//! ## Usage
//!
//! ```bash
//! # Process ./inbox, write ./reports/results.txt
//! txtbatch inbox reports
//!
//! # Same, through the explicit subcommand
//! txtbatch run inbox reports
//!
//! # Skip drafts, keep filesystem order
//! txtbatch inbox reports --exclude "draft_*" --unsorted
//!
//! # Print the batch result as JSON
//! txtbatch inbox reports --output json
//!
//! # Per-file logging on stderr
//! TXTBATCH_LOG=debug txtbatch inbox reports
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use outstanding::Theme;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use txtbatchlib::{
    generate_with_progress, BatchResult, FileReport, FileStatus, FilterConfig, GenerateOptions,
    REPORT_FILE_NAME,
};

/// Include template at compile time
const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.jinja");

/// Environment variable holding the log filter
const LOG_ENV: &str = "TXTBATCH_LOG";

/// Data context for the summary template
#[derive(Debug, Serialize)]
struct SummaryContext {
    input: String,
    empty: bool,
    lines: Vec<String>,
    summary: String,
    report_path: String,
}

/// One line of the per-file listing
fn describe(report: &FileReport) -> String {
    match report.status {
        FileStatus::Success => format!(
            "Processed: {} ({} lines)",
            report.file_name,
            report.line_count.unwrap_or_default()
        ),
        FileStatus::Error => format!(
            "Failed to process {}: {}",
            report.file_name,
            report.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}

fn build_summary_context(result: &BatchResult, report_path: &str) -> SummaryContext {
    SummaryContext {
        input: result.input_path.clone(),
        empty: result.is_empty(),
        lines: result.reports.iter().map(describe).collect(),
        summary: format!(
            "Processing complete - Success: {}, Failed: {}, Total: {}",
            result.success_count(),
            result.error_count(),
            result.total_found
        ),
        report_path: report_path.to_string(),
    }
}

/// Positional folders and filter flags shared by the root command and `run`
fn with_run_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .required(true)
            .help("Folder containing the .txt files to process"),
    )
    .arg(
        Arg::new("output")
            .required(true)
            .help("Folder where results.txt is written"),
    )
    .arg(
        Arg::new("include")
            .short('i')
            .long("include")
            .action(ArgAction::Append)
            .help("Only process files whose name matches this glob pattern"),
    )
    .arg(
        Arg::new("exclude")
            .short('e')
            .long("exclude")
            .action(ArgAction::Append)
            .help("Skip files whose name matches this glob pattern"),
    )
    .arg(
        Arg::new("unsorted")
            .long("unsorted")
            .action(ArgAction::SetTrue)
            .help("Process files in filesystem order instead of by name"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    with_run_args(
        Command::new("txtbatch")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Arthur Debert")
            .about("Count lines in every .txt file of a folder and write a results report")
            .subcommand_negates_reqs(true),
    )
    .subcommand(with_run_args(
        Command::new("run").about("Process a folder of text files (default command)"),
    ))
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn required_path<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, anyhow::Error> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow::anyhow!("missing {name} folder"))
}

/// Handler for run command
fn run_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let input = required_path(matches, "input")?;
    let output = required_path(matches, "output")?;

    let mut options = GenerateOptions::new().filter(build_filter(matches)?);
    if matches.get_flag("unsorted") {
        options = options.unsorted();
    }

    let result = generate_with_progress(input, output, &options, |report| {
        tracing::info!(file = %report.file_name, status = ?report.status, "file done");
    })?;

    // For JSON mode, return raw data
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&result)?));
    }

    let report_path = std::path::Path::new(output).join(REPORT_FILE_NAME);
    let context = build_summary_context(&result, &report_path.to_string_lossy());
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("category", Style::new().bold())
}

/// Send tracing output to stderr, filtered by `TXTBATCH_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cmd = build_command();
    let theme = create_theme();

    // Build the outstanding app with command handlers and run
    let result = App::builder()
        .theme(theme)
        .command("run", run_handler, SUMMARY_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if !output.is_empty() {
                // Check if it's an error message from handler
                if output.starts_with("Error:") {
                    eprintln!("{}", output);
                    return ExitCode::FAILURE;
                }
                print!("{}", output);
            }
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(matches) => {
            // Root command (no subcommand) - treat as run
            let output_mode = matches
                .get_one::<String>("_output_mode")
                .map(|s| match s.as_str() {
                    "json" => outstanding::OutputMode::Json,
                    "text" => outstanding::OutputMode::Text,
                    "term-debug" => outstanding::OutputMode::TermDebug,
                    "term" => outstanding::OutputMode::Term,
                    _ => outstanding::OutputMode::Auto,
                })
                .unwrap_or(outstanding::OutputMode::Auto);

            let ctx = CommandContext {
                output_mode,
                command_path: vec![],
            };

            match run_handler(&matches, &ctx) {
                Ok(Output::Render(value)) => {
                    if output_mode.is_structured() {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&value).unwrap_or_default()
                        );
                    } else {
                        match outstanding::render(SUMMARY_TEMPLATE, &value, &create_theme()) {
                            Ok(output) => print!("{}", output),
                            Err(e) => {
                                eprintln!("Error: {e}");
                                return ExitCode::FAILURE;
                            }
                        }
                    }
                    ExitCode::SUCCESS
                }
                Ok(Output::Silent) => ExitCode::SUCCESS,
                Ok(Output::Binary { .. }) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_describe_success_and_error() {
        let ok = FileReport::success("/in/a.txt", 3);
        let bad = FileReport::error("/in/b.txt", "Is a directory (os error 21)");

        assert_eq!(describe(&ok), "Processed: a.txt (3 lines)");
        assert_eq!(
            describe(&bad),
            "Failed to process b.txt: Is a directory (os error 21)"
        );
    }

    #[test]
    fn test_summary_context() {
        let mut result = BatchResult::new("/in", "now");
        result.total_found = 2;
        result.push(FileReport::success("/in/a.txt", 1));
        result.push(FileReport::error("/in/b.txt", "boom"));

        let ctx = build_summary_context(&result, "/out/results.txt");
        assert!(!ctx.empty);
        assert_eq!(ctx.lines.len(), 2);
        assert_eq!(
            ctx.summary,
            "Processing complete - Success: 1, Failed: 1, Total: 2"
        );
        assert_eq!(ctx.report_path, "/out/results.txt");
    }

    #[test]
    fn test_build_filter_rejects_bad_glob() {
        let matches = build_command()
            .try_get_matches_from(["txtbatch", "in", "out", "--exclude", "[bad"])
            .unwrap();
        assert!(build_filter(&matches).is_err());
    }
}
