//! Deterministic simulation of facility readings.
//!
//! Pure functions of (local time, configuration) only; no shared state and no
//! randomness, so concurrent request handlers need no synchronization here.

pub mod consumption;
pub mod indoor;

pub use consumption::*;
pub use indoor::*;
