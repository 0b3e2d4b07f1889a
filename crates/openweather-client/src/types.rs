//! Weather domain model.

use serde::{Deserialize, Serialize};

/// A normalized current-weather observation for one city.
///
/// Built from a single provider response and consumed immediately; nothing
/// is cached between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    /// ISO-style country code as reported by the provider (e.g. "GB").
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    /// Human-readable condition, title-cased (e.g. "Scattered Clouds").
    pub description: String,
    pub wind_speed_mps: f64,
}
