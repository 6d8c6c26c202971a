//! External data sources.
//!
//! - NOAA SWPC space-weather feeds (`swpc`)

pub mod swpc;

pub use swpc::*;
