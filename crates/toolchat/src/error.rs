//! Application error types.

use thiserror::Error;

/// Main application error type.
///
/// Weather lookup failures never appear here: the orchestrator renders them
/// into answer text and the loop keeps running.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gemini error: {0}")]
    Gemini(#[from] gemini_client::GeminiError),

    #[error("Weather error: {0}")]
    Weather(#[from] openweather_client::WeatherError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
