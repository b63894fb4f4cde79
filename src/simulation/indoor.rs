//! Indoor temperature simulation.
//!
//! Not a thermal model: a reproducible daily curve generator. The reading is a
//! 24-hour sinusoid peaking at the configured hour, with separate weekday and
//! weekend parameter sets, an evening comfort floor, and a small deterministic
//! minute-keyed jitter so consecutive polls do not look frozen.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::f64::consts::PI;

/// Daily temperature curve parameters.
///
/// The weekend triple replaces the weekday triple atomically on Saturday and
/// Sunday; there is no blending across the midnight boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct IndoorTempConfig {
    /// Overnight setback temperature (deg C).
    pub night_temp_c: f64,
    /// Daily maximum, reached at `peak_hour` (deg C).
    pub peak_temp_c: f64,
    /// Minimum served after 17:00 (deg C).
    pub evening_floor_c: f64,
    /// Hour of day at which the sinusoid peaks.
    pub peak_hour: f64,
    pub weekend_night_temp_c: f64,
    pub weekend_peak_temp_c: f64,
    pub weekend_evening_floor_c: f64,
}

impl Default for IndoorTempConfig {
    fn default() -> Self {
        Self {
            night_temp_c: 19.0,
            peak_temp_c: 24.0,
            evening_floor_c: 21.0,
            peak_hour: 15.0,
            weekend_night_temp_c: 18.0,
            weekend_peak_temp_c: 22.5,
            weekend_evening_floor_c: 20.0,
        }
    }
}

/// Simulate the indoor temperature at a facility-local instant.
///
/// Total over all inputs: well-formed configuration can never make it fail,
/// and identical `(at, cfg)` always produce the identical reading.
pub fn simulate_indoor(cfg: &IndoorTempConfig, at: NaiveDateTime) -> f64 {
    let is_weekend = at.weekday().num_days_from_monday() >= 5;
    let (night, peak, floor) = if is_weekend {
        (
            cfg.weekend_night_temp_c,
            cfg.weekend_peak_temp_c,
            cfg.weekend_evening_floor_c,
        )
    } else {
        (cfg.night_temp_c, cfg.peak_temp_c, cfg.evening_floor_c)
    };

    let minute = at.minute();
    let h = at.hour() as f64 + minute as f64 / 60.0 + at.second() as f64 / 3600.0;

    // Floor keeps a misconfigured peak <= night from collapsing the curve.
    let amplitude = (peak - night).max(0.1);
    let mut temp = night + amplitude * ((PI / 12.0) * (h - cfg.peak_hour) + PI / 2.0).sin();

    // One-sided comfort floor in the evening; never lowers the value.
    if h >= 17.0 {
        temp = temp.max(floor);
    }

    // Minute-keyed jitter, +-0.15, reproducible for a given minute.
    let micro = ((minute % 10) as f64 - 5.0) * 0.03;

    ((temp + micro) * 10.0).round() / 10.0
}
