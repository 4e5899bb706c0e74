//! # countline
//!
//! A CLI that counts lines per file category, writes a per-file report and
//! prints per-category totals.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory, report to ./line.txt
//! countline
//!
//! # Count another tree, report elsewhere
//! countline path/to/project --report /tmp/lines.txt
//!
//! # Totals as JSON
//! countline --output json
//! ```
//!
//! With no arguments the built-in configuration is used: `.rs` files are
//! counted as `Rust`, or `Rust Test` when the path contains `_test` or
//! `mod.rs`, and `.venv`, `static`, `migrations`, `staticfiles`,
//! `node_modules`, `dist` and `target` directories are skipped.

mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use countlinelib::{count_to_report, CountConfig, DEFAULT_REPORT_FILE};
use tracing_subscriber::EnvFilter;

use render::{render, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("countline")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts lines per file category, separating test files")
        .arg(
            Arg::new("path")
                .help("Directory to count (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .default_value(DEFAULT_REPORT_FILE)
                .help("Per-file report destination (overwritten)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Summary format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity on stderr (repeatable)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let report = matches
        .get_one::<String>("report")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_REPORT_FILE);
    let mode = matches
        .get_one::<String>("output")
        .and_then(|s| OutputMode::from_name(s))
        .unwrap_or(OutputMode::Text);

    let result = count_to_report(path, &CountConfig::default(), report)?;

    let rendered = render(&result, mode)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
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
    fn test_defaults() {
        let matches = build_command().get_matches_from(["countline"]);
        assert_eq!(matches.get_one::<String>("path").unwrap(), ".");
        assert_eq!(matches.get_one::<String>("report").unwrap(), "line.txt");
        assert_eq!(matches.get_one::<String>("output").unwrap(), "text");
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_rejects_unknown_output() {
        let result = build_command().try_get_matches_from(["countline", "-o", "xml"]);
        assert!(result.is_err());
    }
}
