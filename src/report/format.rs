//! Formatted terminal and JSON output.
//!
//! Formatting lives in one place so:
//! - the scoring/provider code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crossterm::style::Stylize;
use serde::Serialize;

use crate::data::SpaceWeatherSnapshot;
use crate::domain::{BandCondition, ScoringInputs, Verdict};
use crate::error::AppError;

/// Format the space-weather snapshot block.
pub fn format_snapshot(snapshot: &SpaceWeatherSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("Solar flux: {}\n", fmt_opt_int(snapshot.solar_flux)));
    out.push_str(&format!("K-index: {}\n", fmt_opt_f64(snapshot.k_index)));
    out.push_str(&format!(
        "Sunspots: {}\n",
        fmt_opt_int(snapshot.sunspot_number)
    ));
    out.push_str(&format!("Activity: {}\n", snapshot.conditions.label()));
    out.push_str(&format!(
        "Updated: {}\n",
        snapshot.last_update.format("%Y-%m-%d %H:%M:%SZ")
    ));

    out
}

/// Format the run header: snapshot block (when the run fetched one) plus the
/// resolved classifier inputs.
pub fn format_run_summary(
    snapshot: Option<&SpaceWeatherSnapshot>,
    inputs: &ScoringInputs,
) -> String {
    let mut out = String::new();

    out.push_str("=== bands - HF/VHF Band Conditions ===\n");
    if let Some(snapshot) = snapshot {
        out.push_str(&format_snapshot(snapshot));
    }
    out.push_str(&format!(
        "Inputs: SFI={} | K={} | hour={:02}Z | lat={:.2}\n",
        inputs.solar_flux, inputs.k_index, inputs.utc_hour, inputs.latitude_deg
    ));
    out.push('\n');

    out
}

/// Format the per-band table.
pub fn format_band_table(bands: &[BandCondition], color: bool) -> String {
    let mut out = String::new();

    out.push_str("Band conditions:\n");
    for condition in bands {
        out.push_str(&format!(
            "  {:<5} {:>6.1}  {}\n",
            condition.band.label(),
            condition.score,
            verdict_cell(condition.verdict, color)
        ));
    }

    out
}

fn verdict_cell(verdict: Verdict, color: bool) -> String {
    if !color {
        return verdict.label().to_string();
    }
    match verdict {
        Verdict::Good => verdict.label().green().bold().to_string(),
        Verdict::Fair => verdict.label().yellow().to_string(),
        Verdict::Poor => verdict.label().red().to_string(),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    snapshot: Option<&'a SpaceWeatherSnapshot>,
    inputs: &'a ScoringInputs,
    bands: &'a [BandCondition],
}

/// Render a full run as pretty-printed JSON.
pub fn render_report_json(
    snapshot: Option<&SpaceWeatherSnapshot>,
    inputs: &ScoringInputs,
    bands: &[BandCondition],
) -> Result<String, AppError> {
    serde_json::to_string_pretty(&JsonReport {
        snapshot,
        inputs,
        bands,
    })
    .map_err(|e| AppError::data(format!("Failed to encode report JSON: {e}")))
}

/// Render a snapshot alone as pretty-printed JSON.
pub fn render_snapshot_json(snapshot: &SpaceWeatherSnapshot) -> Result<String, AppError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| AppError::data(format!("Failed to encode snapshot JSON: {e}")))
}

fn fmt_opt_int(value: Option<i32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn fmt_opt_f64(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::score_all;
    use crate::data::SolarConditions;
    use crate::domain::Band;
    use chrono::Utc;

    fn sample_snapshot() -> SpaceWeatherSnapshot {
        SpaceWeatherSnapshot {
            solar_flux: Some(178),
            k_index: Some(4.0),
            sunspot_number: None,
            conditions: SolarConditions::derive(Some(178), Some(4.0)),
            last_update: Utc::now(),
        }
    }

    #[test]
    fn band_table_lists_every_band() {
        let inputs = ScoringInputs::new(178.0, 4.0, 23, 49.2827);
        let table = format_band_table(&score_all(&inputs), false);
        for band in Band::ALL {
            assert!(table.contains(band.label()), "missing {}", band.label());
        }
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let inputs = ScoringInputs::new(178.0, 4.0, 23, 49.2827);
        let table = format_band_table(&score_all(&inputs), false);
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn snapshot_block_marks_missing_fields() {
        let text = format_snapshot(&sample_snapshot());
        assert!(text.contains("Solar flux: 178"));
        assert!(text.contains("K-index: 4.00"));
        assert!(text.contains("Sunspots: n/a"));
        assert!(text.contains("Activity: FAIR"));
    }

    #[test]
    fn json_report_round_trips_as_json() {
        let snapshot = sample_snapshot();
        let inputs = ScoringInputs::new(178.0, 4.0, 23, 49.2827);
        let bands = score_all(&inputs);
        let rendered = render_report_json(Some(&snapshot), &inputs, &bands).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["snapshot"]["solar_flux"], 178);
        assert_eq!(value["inputs"]["utc_hour"], 23);
        assert_eq!(value["bands"].as_array().unwrap().len(), 14);
        assert_eq!(value["bands"][0]["band"], "160m");
        assert_eq!(value["bands"][0]["verdict"], "FAIR");
    }
}
