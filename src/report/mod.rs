//! Report rendering: terminal tables and JSON output.

pub mod format;

pub use format::*;
