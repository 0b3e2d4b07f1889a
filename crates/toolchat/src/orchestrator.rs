//! Question orchestration: pick a tool, compose a prompt, ask the model.

use crate::error::AppResult;
use crate::intent::{self, Intent};
use chrono::Local;
use gemini_client::GeminiClient;
use openweather_client::{OpenWeatherClient, WeatherReading};
use tracing::{debug, instrument, warn};

/// Answer returned for a weather question with no recognizable city. No
/// network call is made on this path.
pub const NO_CITY_HELP: &str = "I can help you with weather! Please specify a city. \
     For example: 'What's the weather in London?'";

/// Decides which tool (if any) a question needs and delegates the final
/// phrasing to the language model.
///
/// Holds its collaborators by value; both are constructed from the explicit
/// startup configuration, so tests can point them at mock servers.
pub struct Orchestrator {
    gemini: GeminiClient,
    weather: OpenWeatherClient,
}

impl Orchestrator {
    pub fn new(gemini: GeminiClient, weather: OpenWeatherClient) -> Self {
        Self { gemini, weather }
    }

    /// Answer one question.
    ///
    /// Weather lookup failures become the answer text; model failures
    /// propagate to the caller and end the session.
    #[instrument(skip(self, question))]
    pub async fn answer(&self, question: &str) -> AppResult<String> {
        match intent::classify(question) {
            Intent::Weather => self.answer_weather(question).await,
            Intent::Time => {
                let now = current_timestamp();
                debug!(%now, "Answering time question");
                let prompt = format!(
                    "Current date and time: {now}. Answer the user's question: '{question}'"
                );
                Ok(self.gemini.generate(&prompt).await?)
            }
            Intent::General => Ok(self.gemini.generate(question).await?),
        }
    }

    async fn answer_weather(&self, question: &str) -> AppResult<String> {
        let Some(city) = intent::extract_city(question) else {
            debug!("No city found in weather question");
            return Ok(NO_CITY_HELP.into());
        };

        match self.weather.current(&city).await {
            Ok(reading) => {
                let prompt = weather_prompt(&reading, question);
                Ok(self.gemini.generate(&prompt).await?)
            }
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                // The rendered error is the answer; the model is not consulted.
                Ok(e.to_string())
            }
        }
    }
}

/// Context block handed to the model along with the original question.
fn weather_prompt(reading: &WeatherReading, question: &str) -> String {
    format!(
        "Current weather data for {}, {}:\n\
         - Temperature: {}°C (feels like {}°C)\n\
         - Condition: {}\n\
         - Humidity: {}%\n\
         - Wind speed: {} m/s\n\n\
         Present this weather information in a conversational way to answer \
         the user's question: \"{}\"",
        reading.city,
        reading.country,
        reading.temperature_c,
        reading.feels_like_c,
        reading.description,
        reading.humidity_pct,
        reading.wind_speed_mps,
        question
    )
}

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
