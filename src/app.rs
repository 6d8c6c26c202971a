//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fetch/resolve/classify pipeline
//! - prints reports

use std::time::Duration;

use clap::Parser;

use crate::cli::{ClassifyArgs, Command, ReportArgs, SnapshotArgs};
use crate::data::swpc::{DEFAULT_TIMEOUT_SECS, SwpcClient};
use crate::domain::ReportConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bands` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bands` and `bands --lat -33.9` to behave like
    // `bands report ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the short invocation.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(report_config(&args)),
        Command::Classify(args) => handle_report(classify_config(&args)),
        Command::Snapshot(args) => handle_snapshot(&args),
    }
}

fn handle_report(config: ReportConfig) -> Result<(), AppError> {
    let run = pipeline::run_report(&config)?;

    if config.json {
        println!(
            "{}",
            crate::report::render_report_json(run.snapshot.as_ref(), &run.inputs, &run.bands)?
        );
    } else {
        print!(
            "{}",
            crate::report::format_run_summary(run.snapshot.as_ref(), &run.inputs)
        );
        print!(
            "{}",
            crate::report::format_band_table(&run.bands, config.color)
        );
    }

    Ok(())
}

fn handle_snapshot(args: &SnapshotArgs) -> Result<(), AppError> {
    let client = SwpcClient::from_env(Duration::from_secs(args.timeout_secs))?;
    let snapshot = client.fetch_snapshot();

    if args.json {
        println!("{}", crate::report::render_snapshot_json(&snapshot)?);
    } else {
        print!("{}", crate::report::format_snapshot(&snapshot));
    }

    Ok(())
}

fn report_config(args: &ReportArgs) -> ReportConfig {
    ReportConfig {
        latitude_deg: args.lat,
        hour_override: args.hour,
        sfi_override: args.sfi,
        k_override: args.k_index,
        timeout_secs: args.timeout_secs,
        json: args.json,
        color: !args.no_color,
    }
}

fn classify_config(args: &ClassifyArgs) -> ReportConfig {
    ReportConfig {
        latitude_deg: args.lat,
        hour_override: args.hour,
        sfi_override: Some(args.sfi),
        k_override: Some(args.k_index),
        timeout_secs: DEFAULT_TIMEOUT_SECS,
        json: args.json,
        color: !args.no_color,
    }
}

/// Rewrite argv so `bands` defaults to `bands report`.
///
/// Rules:
/// - `bands`                   -> `bands report`
/// - `bands --lat 12.0 ...`    -> `bands report --lat 12.0 ...`
/// - `bands --help/--version`  -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "classify" | "snapshot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is (clap will produce the usage error).
    argv
}
