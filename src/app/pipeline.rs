//! Shared fetch/resolve/classify pipeline used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! SWPC fetch -> input resolution -> per-band scoring
//!
//! The commands then focus on presentation (table vs JSON).

use std::time::Duration;

use chrono::{Timelike, Utc};

use crate::conditions::score_all;
use crate::data::{SpaceWeatherSnapshot, SwpcClient};
use crate::domain::{BandCondition, ReportConfig, ScoringInputs};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Present when the run actually hit the network.
    pub snapshot: Option<SpaceWeatherSnapshot>,
    pub inputs: ScoringInputs,
    pub bands: Vec<BandCondition>,
}

/// Execute the pipeline: fetch (unless both indices are overridden),
/// resolve the four classifier inputs, and score every band.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    let needs_fetch = config.sfi_override.is_none() || config.k_override.is_none();

    let snapshot = if needs_fetch {
        let client = SwpcClient::from_env(Duration::from_secs(config.timeout_secs))?;
        Some(client.fetch_snapshot())
    } else {
        None
    };

    let inputs = resolve_inputs(config, snapshot.as_ref())?;
    let bands = score_all(&inputs);

    Ok(RunOutput {
        snapshot,
        inputs,
        bands,
    })
}

/// Merge CLI overrides with fetched data into classifier inputs.
///
/// The provider degrades failed series to `None`; this boundary is where
/// missing flux or K-index becomes a hard error unless an override fills
/// it in.
fn resolve_inputs(
    config: &ReportConfig,
    snapshot: Option<&SpaceWeatherSnapshot>,
) -> Result<ScoringInputs, AppError> {
    let solar_flux = config
        .sfi_override
        .or_else(|| snapshot.and_then(|s| s.solar_flux).map(f64::from))
        .ok_or_else(|| {
            AppError::data("Solar flux unavailable from NOAA; pass --sfi to supply one.")
        })?;

    let k_index = config
        .k_override
        .or_else(|| snapshot.and_then(|s| s.k_index))
        .ok_or_else(|| {
            AppError::data("K-index unavailable from NOAA; pass --k-index to supply one.")
        })?;

    let utc_hour = config
        .hour_override
        .unwrap_or_else(|| i64::from(Utc::now().hour()));

    Ok(ScoringInputs::new(
        solar_flux,
        k_index,
        utc_hour,
        config.latitude_deg,
    ))
}
