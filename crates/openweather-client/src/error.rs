//! Weather lookup errors.
//!
//! Each variant renders to the exact user-facing message the assistant
//! prints, so callers can branch on the tag and still show `to_string()`
//! verbatim.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather API key is invalid or not activated yet. Please check your API key.")]
    Unauthorized,

    /// Carries the caller's original spelling, untrimmed and untransformed.
    #[error("City '{city}' not found. Please check the spelling.")]
    CityNotFound { city: String },

    #[error("Weather API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error fetching weather data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error parsing weather data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error parsing weather data: missing field '{0}'")]
    MissingField(&'static str),
}
