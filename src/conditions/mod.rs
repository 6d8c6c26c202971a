//! Band-condition classification.
//!
//! Responsibilities:
//!
//! - day/night/grayline timing (`daylight`)
//! - per-band scoring and verdict thresholds (`classifier`)

pub mod classifier;
pub mod daylight;

pub use classifier::*;
pub use daylight::*;
