use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::{LocationConfig, WeatherConfig};

/// Current outdoor conditions at the facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub humidity_percent: f64,
}

/// Everything that can go wrong talking to the upstream.
///
/// Callers never see these past the cache boundary; the variants exist so the
/// refresh log line says what actually failed instead of a blanket "error".
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream connection failed: {0}")]
    Connect(String),
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream response malformed: {0}")]
    Decode(String),
}

/// Source of current weather observations.
#[async_trait]
pub trait CurrentWeatherSource: Send + Sync {
    async fn fetch_current(&self) -> Result<CurrentWeather, WeatherError>;
}

/// Open-Meteo client pinned to the facility's coordinates.
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoClient {
    pub fn new(weather: &WeatherConfig, location: &LocationConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(weather.http_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: weather.base_url.trim_end_matches('/').to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }
}

#[async_trait]
impl CurrentWeatherSource for OpenMeteoClient {
    async fn fetch_current(&self) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={:.4}&longitude={:.4}&current=temperature_2m,relative_humidity_2m",
            self.base_url, self.latitude, self.longitude
        );

        debug!(%url, "fetching current weather");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout
            } else {
                WeatherError::Connect(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout
            } else {
                WeatherError::Decode(e.to_string())
            }
        })?;

        Ok(CurrentWeather {
            temperature_c: body.current.temperature_2m,
            humidity_percent: body.current.relative_humidity_2m,
        })
    }
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
}
