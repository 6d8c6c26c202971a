//! Command-line parsing for the band-conditions reporter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring and provider code.

use clap::{Parser, Subcommand};

use crate::data::swpc::DEFAULT_TIMEOUT_SECS;

/// Default station latitude (Vancouver, BC).
pub const DEFAULT_LATITUDE: f64 = 49.2827;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bands",
    version,
    about = "HF/VHF band conditions from live NOAA space weather"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch NOAA space weather, classify every band, and print the report.
    Report(ReportArgs),
    /// Classify from explicit indices without touching the network.
    Classify(ClassifyArgs),
    /// Fetch and print the space-weather snapshot only.
    Snapshot(SnapshotArgs),
}

/// Options for the live report.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Station latitude in degrees (negative for southern hemisphere).
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub lat: f64,

    /// Override the UTC hour (values outside 0-23 wrap modulo 24).
    #[arg(long, allow_negative_numbers = true)]
    pub hour: Option<i64>,

    /// Override the fetched solar flux index.
    #[arg(long)]
    pub sfi: Option<f64>,

    /// Override the fetched K-index.
    #[arg(long = "k-index")]
    pub k_index: Option<f64>,

    /// HTTP timeout per NOAA request, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Disable colored verdicts.
    #[arg(long)]
    pub no_color: bool,
}

/// Options for offline classification.
#[derive(Debug, Parser, Clone)]
pub struct ClassifyArgs {
    /// Solar flux index.
    #[arg(long, allow_negative_numbers = true)]
    pub sfi: f64,

    /// K-index.
    #[arg(long = "k-index", allow_negative_numbers = true)]
    pub k_index: f64,

    /// UTC hour (defaults to the current hour; wraps modulo 24).
    #[arg(long, allow_negative_numbers = true)]
    pub hour: Option<i64>,

    /// Station latitude in degrees.
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub lat: f64,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Disable colored verdicts.
    #[arg(long)]
    pub no_color: bool,
}

/// Options for the snapshot-only fetch.
#[derive(Debug, Parser)]
pub struct SnapshotArgs {
    /// HTTP timeout per NOAA request, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the snapshot as JSON.
    #[arg(long)]
    pub json: bool,
}
