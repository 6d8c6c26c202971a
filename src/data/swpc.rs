//! NOAA SWPC space-weather client.
//!
//! Three independent JSON endpoints: 10.7cm solar flux, planetary K-index,
//! and observed sunspot number. Every read is best-effort — any transport,
//! status, or shape problem degrades that one field to `None` on the
//! snapshot instead of failing the fetch, so a dead feed never blocks the
//! other two.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://services.swpc.noaa.gov";

const FLUX_PATH: &str = "/json/f107_cm_flux.json";
const K_INDEX_PATH: &str = "/products/noaa-planetary-k-index.json";
const SUNSPOT_PATH: &str = "/json/solar-cycle/observed-solar-cycle-indices.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Coarse provider-side activity summary derived from flux and K-index.
///
/// This is a single whole-sky grade, not to be confused with the per-band
/// `Verdict`s from the classifier — the two use unrelated threshold tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SolarConditions {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl SolarConditions {
    pub fn label(self) -> &'static str {
        match self {
            SolarConditions::Excellent => "EXCELLENT",
            SolarConditions::Good => "GOOD",
            SolarConditions::Fair => "FAIR",
            SolarConditions::Poor => "POOR",
            SolarConditions::Unknown => "UNKNOWN",
        }
    }

    /// Grade the sky from the two indices; `Unknown` if either is missing.
    pub fn derive(solar_flux: Option<i32>, k_index: Option<f64>) -> Self {
        let (Some(sfi), Some(k)) = (solar_flux, k_index) else {
            return SolarConditions::Unknown;
        };
        if sfi >= 150 && k <= 2.0 {
            SolarConditions::Excellent
        } else if sfi >= 100 && k <= 3.0 {
            SolarConditions::Good
        } else if sfi >= 70 && k <= 5.0 {
            SolarConditions::Fair
        } else {
            SolarConditions::Poor
        }
    }
}

/// Latest space-weather observations; `None` marks a series that could not
/// be read.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceWeatherSnapshot {
    pub solar_flux: Option<i32>,
    pub k_index: Option<f64>,
    pub sunspot_number: Option<i32>,
    pub conditions: SolarConditions,
    pub last_update: DateTime<Utc>,
}

pub struct SwpcClient {
    client: Client,
    base_url: String,
}

impl SwpcClient {
    /// Build a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("band-conditions/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::usage(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the environment.
    ///
    /// `SWPC_BASE_URL` (also read from `.env`) overrides the NOAA host;
    /// useful for pointing the client at a local fixture server.
    pub fn from_env(timeout: Duration) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("SWPC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, timeout)
    }

    /// Fetch the latest snapshot. Never fails: unreadable series come back
    /// as `None`, and the coarse summary degrades to `UNKNOWN`.
    ///
    /// The three fetches have no ordering dependency, so they run in
    /// parallel; each is bounded by the client timeout.
    pub fn fetch_snapshot(&self) -> SpaceWeatherSnapshot {
        let (flux, (kp, ssn)) = rayon::join(
            || self.fetch_json(FLUX_PATH),
            || {
                rayon::join(
                    || self.fetch_json(K_INDEX_PATH),
                    || self.fetch_json(SUNSPOT_PATH),
                )
            },
        );

        let solar_flux = flux.as_ref().and_then(latest_flux);
        let k_index = kp.as_ref().and_then(latest_k_index);
        let sunspot_number = ssn.as_ref().and_then(latest_sunspot_number);

        SpaceWeatherSnapshot {
            solar_flux,
            k_index,
            sunspot_number,
            conditions: SolarConditions::derive(solar_flux, k_index),
            last_update: Utc::now(),
        }
    }

    fn fetch_json(&self, path: &str) -> Option<Value> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().ok()?;
        resp.error_for_status().ok()?.json().ok()
    }
}

/// Extract the newest flux reading: array of objects, chronologically
/// ordered, value under `"flux"` with `"value"` as a fallback key.
fn latest_flux(body: &Value) -> Option<i32> {
    let last = body.as_array()?.last()?;
    let raw = last.get("flux").or_else(|| last.get("value"))?;
    Some(coerce_f64(raw)?.round() as i32)
}

/// Extract the newest K-index: array of arrays where row 0 is a header,
/// each data row `[time, kp, ...]`.
fn latest_k_index(body: &Value) -> Option<f64> {
    let rows = body.as_array()?;
    if rows.len() < 2 {
        return None;
    }
    let last = rows.last()?.as_array()?;
    if last.len() < 2 {
        return None;
    }
    coerce_f64(&last[1])
}

/// Extract the newest observed sunspot number: array of objects keyed
/// `"ssn"`.
fn latest_sunspot_number(body: &Value) -> Option<i32> {
    let last = body.as_array()?.last()?;
    Some(coerce_f64(last.get("ssn")?)?.round() as i32)
}

/// Best-effort numeric coercion. The SWPC feeds mix JSON numbers and
/// numeric strings across (and sometimes within) series.
fn coerce_f64(raw: &Value) -> Option<f64> {
    let v = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    v.is_finite().then_some(v)
}
