//! Facility dashboard readings service.
//!
//! Simulated indoor climate and cumulative daily consumption derived from
//! local wall-clock time, plus outdoor conditions fetched from Open-Meteo
//! behind a TTL cache, exposed as a small GET-only HTTP API.

pub mod api;
pub mod clock;
pub mod config;
pub mod service;
pub mod simulation;
pub mod telemetry;
pub mod weather;
