//! `band-conditions` library crate.
//!
//! The binary (`bands`) is a thin wrapper around this library so that:
//!
//! - the scoring model is testable without spawning processes or hitting NOAA
//! - modules are reusable (e.g., future TUI/daemon front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod conditions;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
