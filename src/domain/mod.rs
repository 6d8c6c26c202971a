//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed band catalog (`Band`)
//! - per-band outcomes (`Verdict`, `BandCondition`)
//! - normalized classifier inputs (`ScoringInputs`)
//! - run configuration derived from CLI flags (`ReportConfig`)

pub mod types;

pub use types::*;
