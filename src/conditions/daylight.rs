//! Day/night/grayline timing for the scoring model.
//!
//! The model uses a simplified solar day: daytime is the fixed UTC window
//! `[6, 18]`, and the grayline is a band around each window edge whose width
//! grows with |latitude| (terminator crossings last longer at high
//! latitudes).

/// First daytime hour (UTC), inclusive.
pub const DAY_START: u32 = 6;
/// Last daytime hour (UTC), inclusive.
pub const DAY_END: u32 = 18;

/// Latitude at which the grayline width saturates.
const WIDTH_SATURATION_LAT: f64 = 66.0;

/// Distance between two hours on the 24-hour circle, in `[0, 12]`.
pub fn hour_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 24.0;
    d.min(24.0 - d)
}

/// Grayline half-width in hours, in `[1, 3]`.
///
/// Grows linearly with |latitude|, saturating at 66 degrees.
pub fn grayline_width(latitude_deg: f64) -> f64 {
    let lat = latitude_deg.abs().min(WIDTH_SATURATION_LAT);
    1.0 + (lat / WIDTH_SATURATION_LAT) * 2.0
}

/// Day/grayline state for one (hour, latitude) pair.
///
/// `grayline` is evaluated independently of `daytime`, so an hour near a
/// window edge can be both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daylight {
    pub daytime: bool,
    pub grayline: bool,
}

impl Daylight {
    /// Expects a normalized hour (`0..=23`); wraps otherwise.
    pub fn at(utc_hour: u32, latitude_deg: f64) -> Self {
        let hour = utc_hour % 24;
        let h = f64::from(hour);
        let width = grayline_width(latitude_deg);
        Self {
            daytime: (DAY_START..=DAY_END).contains(&hour),
            grayline: hour_distance(h, f64::from(DAY_START)) <= width
                || hour_distance(h, f64::from(DAY_END)) <= width,
        }
    }
}
