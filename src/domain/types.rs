//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during classification
//! - rendered to the terminal report or to JSON output

use serde::Serialize;

/// The amateur-radio band catalog, ordered from longest to shortest
/// wavelength.
///
/// `Band::ALL` fixes the iteration order of every report, so output is
/// deterministic run to run. The order carries no scoring meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    #[serde(rename = "160m")]
    M160,
    #[serde(rename = "80m")]
    M80,
    #[serde(rename = "60m")]
    M60,
    #[serde(rename = "40m")]
    M40,
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "20m")]
    M20,
    #[serde(rename = "17m")]
    M17,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "12m")]
    M12,
    #[serde(rename = "11m")]
    M11,
    #[serde(rename = "10m")]
    M10,
    #[serde(rename = "6m")]
    M6,
    #[serde(rename = "2m")]
    M2,
    #[serde(rename = "70cm")]
    Cm70,
}

impl Band {
    pub const ALL: [Band; 14] = [
        Band::M160,
        Band::M80,
        Band::M60,
        Band::M40,
        Band::M30,
        Band::M20,
        Band::M17,
        Band::M15,
        Band::M12,
        Band::M11,
        Band::M10,
        Band::M6,
        Band::M2,
        Band::Cm70,
    ];

    /// Display name, e.g. `"20m"`.
    pub fn label(self) -> &'static str {
        match self {
            Band::M160 => "160m",
            Band::M80 => "80m",
            Band::M60 => "60m",
            Band::M40 => "40m",
            Band::M30 => "30m",
            Band::M20 => "20m",
            Band::M17 => "17m",
            Band::M15 => "15m",
            Band::M12 => "12m",
            Band::M11 => "11m",
            Band::M10 => "10m",
            Band::M6 => "6m",
            Band::M2 => "2m",
            Band::Cm70 => "70cm",
        }
    }
}

/// Qualitative propagation verdict for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Good,
    Fair,
    Poor,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Good => "GOOD",
            Verdict::Fair => "FAIR",
            Verdict::Poor => "POOR",
        }
    }
}

/// One band's scored outcome.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BandCondition {
    pub band: Band,
    pub score: f64,
    pub verdict: Verdict,
}

/// Normalized classifier inputs.
///
/// The constructor applies the entry coercions once, so scoring code can
/// treat the fields as already normalized: solar flux and K-index truncate
/// toward zero, the hour wraps into `0..=23`. Latitude stays raw; the
/// absolute value and polar clamp happen at grayline-width computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringInputs {
    pub solar_flux: i32,
    pub k_index: i32,
    pub utc_hour: u32,
    pub latitude_deg: f64,
}

impl ScoringInputs {
    pub fn new(solar_flux: f64, k_index: f64, utc_hour: i64, latitude_deg: f64) -> Self {
        Self {
            solar_flux: solar_flux as i32,
            k_index: k_index as i32,
            utc_hour: utc_hour.rem_euclid(24) as u32,
            latitude_deg,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub latitude_deg: f64,
    /// UTC hour override; `None` means use the current hour.
    pub hour_override: Option<i64>,
    /// Solar flux override; takes precedence over fetched data.
    pub sfi_override: Option<f64>,
    /// K-index override; takes precedence over fetched data.
    pub k_override: Option<f64>,
    pub timeout_secs: u64,
    pub json: bool,
    pub color: bool,
}
