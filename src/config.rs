use anyhow::{Context, Result};
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::api::response::ResponseFormat;
use crate::simulation::{ConsumptionConfig, IndoorTempConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub clock: ClockConfig,
    pub location: LocationConfig,
    pub indoor: IndoorTempConfig,
    pub water: ConsumptionConfig,
    pub energy: ConsumptionConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Presentation of reading values: `json` or `plain`.
    pub format: ResponseFormat,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    pub utc_offset_hours: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub base_url: String,
    pub cache_ttl_seconds: u64,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("FACILITY__").split("__"));
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        self.water.validate().context("water consumption config")?;
        self.energy.validate().context("energy consumption config")?;
        Ok(())
    }
}
