//! Realtime weather-station readings integration
//!
//! HTTP client for Singapore's realtime environment API, which exposes
//! per-station sensor readings for air temperature, relative humidity,
//! wind speed and rainfall. Both the legacy and the v2 response
//! envelopes are accepted and normalized into domain readings.

pub mod client;
pub mod models;

pub use client::{RealtimeApi, RealtimeClient, RealtimeConfig, RealtimeError};
pub use models::ReadingsEnvelope;
