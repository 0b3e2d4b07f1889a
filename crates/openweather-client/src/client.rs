//! OpenWeatherMap current-weather HTTP client.

use crate::error::WeatherError;
use crate::types::WeatherReading;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{info, instrument};

/// OpenWeatherMap client.
///
/// One endpoint, metric units, no retries. The HTTP client keeps reqwest's
/// default timeout behavior; no explicit request timeout is configured.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Fetch the current weather for a city.
    ///
    /// The query uses the trimmed city name; error messages keep the
    /// caller's original spelling.
    #[instrument(skip(self))]
    pub async fn current(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let query_city = city.trim();

        info!(city = %query_city, "Fetching weather");

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", query_city),
                ("appid", self.api_key.expose_secret()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
                StatusCode::NOT_FOUND => WeatherError::CityNotFound {
                    city: city.to_string(),
                },
                _ => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".into());
                    WeatherError::Api {
                        status: status.as_u16(),
                        message,
                    }
                }
            });
        }

        let body = response.text().await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let description = parsed
            .weather
            .first()
            .map(|w| title_case(&w.description))
            .ok_or(WeatherError::MissingField("weather"))?;

        Ok(WeatherReading {
            city: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            description,
            wind_speed_mps: parsed.wind.speed,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
