//! Cumulative daily consumption simulation.
//!
//! One curve shape shared by every metered resource: a constant base draw
//! spread across all 24 hours plus an "additional" work-hours draw that ramps
//! in along a raised-cosine S-curve. The accumulated value resets implicitly
//! at midnight because it is a pure function of hours-since-midnight.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::f64::consts::PI;

/// Per-resource daily consumption parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumptionConfig {
    /// Total accumulated over a full day, base included.
    pub total_daily: f64,
    /// Portion drawn evenly across all 24 hours.
    pub base_daily: f64,
    /// Work-hours window start, fractional hours.
    pub work_start: f64,
    /// Work-hours window end, fractional hours.
    pub work_end: f64,
}

impl ConsumptionConfig {
    /// Work-hours portion: everything above the base load.
    pub fn additional_daily(&self) -> f64 {
        self.total_daily - self.base_daily
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=self.total_daily).contains(&self.base_daily) {
            bail!(
                "base_daily {} must be within [0, total_daily {}]",
                self.base_daily,
                self.total_daily
            );
        }
        if self.work_start < 0.0 || self.work_end > 24.0 || self.work_start >= self.work_end {
            bail!(
                "work hours [{}, {}) must satisfy 0 <= start < end <= 24",
                self.work_start,
                self.work_end
            );
        }
        Ok(())
    }
}

/// Quantity accumulated since local midnight, `h` hours into the day.
///
/// Monotone non-decreasing over `[0, 24]`; exactly 0 at `h = 0` and exactly
/// `total_daily` at `h = 24`. Out-of-range `h` is clamped.
pub fn cumulative_today(cfg: &ConsumptionConfig, h: f64) -> f64 {
    let h = h.clamp(0.0, 24.0);
    let base = cfg.base_daily * h / 24.0;

    let additional = cfg.additional_daily();
    let extra = if h <= cfg.work_start {
        0.0
    } else if h >= cfg.work_end {
        additional
    } else {
        let x = (h - cfg.work_start) / (cfg.work_end - cfg.work_start);
        // Raised cosine: zero slope entering and leaving the window.
        additional * (1.0 - (PI * x).cos()) / 2.0
    };

    base + extra
}
