//! Facility-local time source.
//!
//! All simulation inputs are derived from local wall-clock time, so the one
//! clock abstraction is injected everywhere a "now" is needed. Swap in
//! [`FixedClock`] to pin the simulation to a known instant in tests.

use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDateTime, Utc};

/// Supplies the current facility-local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock offset to the facility's timezone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn from_offset_hours(hours: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(hours * 3600)
            .with_context(|| format!("invalid UTC offset: {hours}h"))?;
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// Clock pinned to a constant instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 4)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_rejects_out_of_range_offset() {
        assert!(SystemClock::from_offset_hours(2).is_ok());
        assert!(SystemClock::from_offset_hours(-5).is_ok());
        assert!(SystemClock::from_offset_hours(25).is_err());
    }
}
