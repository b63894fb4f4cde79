//! Outdoor weather readings from the Open-Meteo forecast API.
//!
//! The upstream is slow and occasionally unreachable, so every read goes
//! through [`WeatherCache`], which bounds upstream traffic to one request per
//! TTL window and degrades to the last known values instead of erroring.

pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;
