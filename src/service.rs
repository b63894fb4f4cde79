//! Request-facing facade over the core components.
//!
//! [`AppState`] owns the clock and the weather cache and dispatches into the
//! pure simulation functions; it carries no logic of its own beyond wiring
//! configuration to the right model.

use anyhow::Result;
use chrono::Timelike;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::simulation::{cumulative_today, simulate_indoor};
use crate::weather::{CurrentWeather, OpenMeteoClient, WeatherCache};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    clock: Arc<dyn Clock>,
    weather: Arc<WeatherCache>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let clock: Arc<dyn Clock> =
            Arc::new(SystemClock::from_offset_hours(cfg.clock.utc_offset_hours)?);
        let client = OpenMeteoClient::new(&cfg.weather, &cfg.location)?;
        let weather = Arc::new(WeatherCache::new(
            Arc::new(client),
            Duration::from_secs(cfg.weather.cache_ttl_seconds),
        ));
        Ok(Self::with_parts(cfg, clock, weather))
    }

    /// Assemble from explicit parts. Tests use this to pin the clock and point
    /// the weather client at a mock upstream.
    pub fn with_parts(cfg: Config, clock: Arc<dyn Clock>, weather: Arc<WeatherCache>) -> Self {
        Self {
            cfg,
            clock,
            weather,
        }
    }

    pub fn indoor_temp_c(&self) -> f64 {
        simulate_indoor(&self.cfg.indoor, self.clock.now())
    }

    pub async fn outdoor(&self) -> CurrentWeather {
        self.weather.current().await
    }

    pub fn water_today(&self) -> f64 {
        cumulative_today(&self.cfg.water, self.hours_since_midnight())
    }

    pub fn energy_today(&self) -> f64 {
        cumulative_today(&self.cfg.energy, self.hours_since_midnight())
    }

    pub fn local_datetime(&self) -> String {
        self.clock.now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn hours_since_midnight(&self) -> f64 {
        let t = self.clock.now().time();
        t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0
    }
}
