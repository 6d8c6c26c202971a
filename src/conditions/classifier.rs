//! The band-condition scoring model.
//!
//! Every band is scored independently: a neutral baseline plus four
//! adjustments (solar flux, geomagnetic activity, time of day, low-flux
//! floors), then thresholded into a verdict. The function is total — any
//! numeric inputs produce a well-defined score, physically plausible or not.
//!
//! All constants here are part of the model. Changing any of them changes
//! the verdicts.

use crate::conditions::daylight::Daylight;
use crate::domain::{Band, BandCondition, ScoringInputs, Verdict};

const BASE_SCORE: f64 = 50.0;
const GOOD_THRESHOLD: f64 = 65.0;
const FAIR_THRESHOLD: f64 = 40.0;

/// Flux level treated as neutral: the SFI term is `(sfi - 100) * weight`.
const SFI_NEUTRAL: f64 = 100.0;

/// Per-band sensitivity to solar flux.
///
/// Higher bands lean harder on F-layer ionization; the low bands are
/// NVIS/ground-wave dominated and barely react. 2m/70cm are line-of-sight
/// and ignore flux entirely.
fn sfi_weight(band: Band) -> f64 {
    match band {
        Band::M160 => 0.05,
        Band::M80 => 0.10,
        Band::M60 => 0.15,
        Band::M40 => 0.20,
        Band::M30 => 0.25,
        Band::M20 => 0.35,
        Band::M17 => 0.40,
        Band::M15 => 0.45,
        Band::M12 => 0.50,
        Band::M11 => 0.52,
        Band::M10 => 0.55,
        Band::M6 => 0.60,
        Band::M2 | Band::Cm70 => 0.0,
    }
}

/// Geomagnetic adjustment, identical for every band.
///
/// The match arms make the first-match-wins bracket ordering structural:
/// each integer K lands in exactly one bracket.
fn geomagnetic_adjustment(k_index: i32) -> f64 {
    match k_index {
        ..=1 => 15.0,
        2 => 5.0,
        3 => -10.0,
        4 => -25.0,
        _ => -40.0,
    }
}

/// Day/night adjustment. Only 40m branches on the grayline — the model's
/// encoding of that band's dawn/dusk enhancement. Low bands suffer daytime
/// D-layer absorption; high bands need daytime ionization to open.
fn time_of_day_adjustment(band: Band, daylight: Daylight) -> f64 {
    let day = daylight.daytime;
    match band {
        Band::M160 => {
            if day {
                -30.0
            } else {
                25.0
            }
        }
        Band::M80 => {
            if day {
                -20.0
            } else {
                20.0
            }
        }
        Band::M60 => {
            if day {
                -10.0
            } else {
                15.0
            }
        }
        Band::M40 => {
            if daylight.grayline {
                20.0
            } else if day {
                5.0
            } else {
                15.0
            }
        }
        Band::M30 => {
            if day {
                15.0
            } else {
                10.0
            }
        }
        Band::M20 => {
            if day {
                25.0
            } else {
                -15.0
            }
        }
        Band::M17 => {
            if day {
                25.0
            } else {
                -20.0
            }
        }
        Band::M15 => {
            if day {
                20.0
            } else {
                -25.0
            }
        }
        Band::M12 => {
            if day {
                15.0
            } else {
                -30.0
            }
        }
        Band::M11 => {
            if day {
                15.0
            } else {
                -32.0
            }
        }
        Band::M10 => {
            if day {
                15.0
            } else {
                -35.0
            }
        }
        Band::M6 => {
            if day {
                10.0
            } else {
                -40.0
            }
        }
        Band::M2 | Band::Cm70 => 10.0,
    }
}

/// Hard penalties for bands that stay closed without enough flux.
///
/// Layered on top of the SFI term, not replacing it.
fn low_flux_penalty(band: Band, solar_flux: i32) -> f64 {
    match band {
        Band::M12 | Band::M11 | Band::M10 | Band::M6 if solar_flux < 100 => -30.0,
        Band::M17 | Band::M15 if solar_flux < 80 => -15.0,
        _ => 0.0,
    }
}

fn verdict_for(score: f64) -> Verdict {
    if score >= GOOD_THRESHOLD {
        Verdict::Good
    } else if score >= FAIR_THRESHOLD {
        Verdict::Fair
    } else {
        Verdict::Poor
    }
}

fn score_with_daylight(band: Band, inputs: &ScoringInputs, daylight: Daylight) -> f64 {
    BASE_SCORE
        + (f64::from(inputs.solar_flux) - SFI_NEUTRAL) * sfi_weight(band)
        + geomagnetic_adjustment(inputs.k_index)
        + time_of_day_adjustment(band, daylight)
        + low_flux_penalty(band, inputs.solar_flux)
}

/// Raw model score for one band.
pub fn band_score(band: Band, inputs: &ScoringInputs) -> f64 {
    let daylight = Daylight::at(inputs.utc_hour, inputs.latitude_deg);
    score_with_daylight(band, inputs, daylight)
}

/// Score every band in catalog order.
pub fn score_all(inputs: &ScoringInputs) -> Vec<BandCondition> {
    let daylight = Daylight::at(inputs.utc_hour, inputs.latitude_deg);
    Band::ALL
        .iter()
        .map(|&band| {
            let score = score_with_daylight(band, inputs, daylight);
            BandCondition {
                band,
                score,
                verdict: verdict_for(score),
            }
        })
        .collect()
}

/// Classify every band in catalog order: the pure
/// `(flux, K, hour, latitude) -> verdict per band` contract.
pub fn classify(inputs: &ScoringInputs) -> Vec<(Band, Verdict)> {
    score_all(inputs)
        .into_iter()
        .map(|c| (c.band, c.verdict))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(solar_flux: f64, k_index: f64, utc_hour: i64, latitude_deg: f64) -> ScoringInputs {
        ScoringInputs::new(solar_flux, k_index, utc_hour, latitude_deg)
    }

    fn verdict(band: Band, i: &ScoringInputs) -> Verdict {
        classify(i)
            .into_iter()
            .find(|(b, _)| *b == band)
            .map(|(_, v)| v)
            .unwrap()
    }

    #[test]
    fn classify_is_deterministic() {
        let i = inputs(178.0, 4.0, 23, 49.2827);
        assert_eq!(classify(&i), classify(&i));
    }

    /// Reference run: solar flux 178, K 4, 23:00 UTC, Vancouver.
    #[test]
    fn vancouver_evening_reference_run() {
        let i = inputs(178.0, 4.0, 23, 49.2827);
        let expected = [
            (Band::M160, Verdict::Fair),
            (Band::M80, Verdict::Fair),
            (Band::M60, Verdict::Fair),
            (Band::M40, Verdict::Fair),
            (Band::M30, Verdict::Fair),
            (Band::M20, Verdict::Poor),
            (Band::M17, Verdict::Poor),
            (Band::M15, Verdict::Poor),
            (Band::M12, Verdict::Poor),
            (Band::M11, Verdict::Poor),
            (Band::M10, Verdict::Poor),
            (Band::M6, Verdict::Poor),
            (Band::M2, Verdict::Poor),
            (Band::Cm70, Verdict::Poor),
        ];
        assert_eq!(classify(&i), expected);
    }

    #[test]
    fn quiet_midday_opens_20m() {
        // SFI 100, K 0, noon: no grayline (6 hours from either edge).
        let i = inputs(100.0, 0.0, 12, 49.2827);
        assert_eq!(band_score(Band::M20, &i), 90.0);
        assert_eq!(verdict(Band::M20, &i), Verdict::Good);
    }

    #[test]
    fn flux_floor_is_strictly_below_100() {
        // At exactly SFI 100, 6m takes no floor penalty.
        let at_100 = inputs(100.0, 0.0, 12, 49.2827);
        assert_eq!(band_score(Band::M6, &at_100), 75.0);

        // One unit lower, the -30 floor kicks in on top of the SFI term.
        let at_99 = inputs(99.0, 0.0, 12, 49.2827);
        assert!((band_score(Band::M6, &at_99) - 44.4).abs() < 1e-9);
    }

    #[test]
    fn storm_night_low_flux_closes_10m() {
        let i = inputs(60.0, 6.0, 0, 49.2827);
        assert!((band_score(Band::M10, &i) + 77.0).abs() < 1e-9);
        assert_eq!(verdict(Band::M10, &i), Verdict::Poor);
    }

    #[test]
    fn score_is_monotone_in_flux_for_hf_bands() {
        for hour in [0, 12] {
            for band in Band::ALL {
                let lo = band_score(band, &inputs(90.0, 2.0, hour, 20.0));
                let hi = band_score(band, &inputs(250.0, 2.0, hour, 20.0));
                assert!(
                    hi >= lo,
                    "raising SFI lowered {} at hour {hour}",
                    band.label()
                );
            }
        }
    }

    #[test]
    fn vhf_bands_ignore_flux() {
        for band in [Band::M2, Band::Cm70] {
            let lo = band_score(band, &inputs(60.0, 2.0, 12, 20.0));
            let hi = band_score(band, &inputs(300.0, 2.0, 12, 20.0));
            assert_eq!(lo, hi);
        }
    }

    #[test]
    fn geomagnetic_brackets_are_totally_ordered() {
        let scores: Vec<f64> = [0, 1, 2, 3, 4, 5, 9]
            .into_iter()
            .map(|k| band_score(Band::M20, &inputs(150.0, k as f64, 12, 20.0)))
            .collect();

        // k=0 and k=1 share the quietest bracket.
        assert_eq!(scores[0], scores[1]);
        // Each later bracket strictly degrades the score.
        assert!(scores[1] > scores[2]);
        assert!(scores[2] > scores[3]);
        assert!(scores[3] > scores[4]);
        assert!(scores[4] > scores[5]);
        // k=5 and k=9 share the storm bracket.
        assert_eq!(scores[5], scores[6]);
    }

    #[test]
    fn grayline_boosts_40m_over_plain_day_and_night() {
        // Hour 5 at Vancouver latitude sits inside the grayline window.
        let grayline = band_score(Band::M40, &inputs(100.0, 0.0, 5, 49.2827));
        let night = band_score(Band::M40, &inputs(100.0, 0.0, 0, 49.2827));
        let day = band_score(Band::M40, &inputs(100.0, 0.0, 12, 49.2827));
        assert_eq!(grayline - night, 5.0);
        assert_eq!(grayline - day, 15.0);
    }

    #[test]
    fn grayline_wins_when_daytime_overlaps() {
        // Hour 7 at mid latitude is both daytime and grayline; 40m takes
        // the grayline branch.
        let i = inputs(100.0, 0.0, 7, 49.2827);
        assert_eq!(band_score(Band::M40, &i), 50.0 + 15.0 + 20.0);
    }

    #[test]
    fn out_of_range_hours_wrap_before_scoring() {
        let wrapped = inputs(150.0, 2.0, 25, 20.0);
        let direct = inputs(150.0, 2.0, 1, 20.0);
        assert_eq!(classify(&wrapped), classify(&direct));

        let negative = inputs(150.0, 2.0, -1, 20.0);
        let evening = inputs(150.0, 2.0, 23, 20.0);
        assert_eq!(classify(&negative), classify(&evening));
    }

    #[test]
    fn implausible_inputs_still_produce_verdicts() {
        // Negative flux and absurd K: out-of-model but well-defined.
        let i = inputs(-50.0, 42.0, 12, 91.0);
        assert_eq!(classify(&i).len(), 14);
    }
}
