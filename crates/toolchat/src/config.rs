//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Application configuration.
///
/// Built once at startup and handed to the components that need it; nothing
/// reads the environment afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gemini API key. Not validated at startup: an absent key surfaces as
    /// an authentication error on the first model call.
    #[serde(default)]
    pub gemini_api_key: String,

    /// Gemini API base URL.
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    /// Model used for all completions.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// OpenWeatherMap API key. Absence is warned about at startup but does
    /// not block the assistant.
    #[serde(default)]
    pub openweather_api_key: Option<String>,

    /// OpenWeatherMap API base URL.
    #[serde(default = "default_openweather_base_url")]
    pub openweather_base_url: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".into()
}

fn default_openweather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    // Keys stay flat and keep their historical names:
                    // GEMINI_API_KEY, OPENWEATHER_API_KEY.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
