//! Common test utilities for integration tests.

use gemini_client::GeminiClient;
use openweather_client::OpenWeatherClient;
use toolchat::orchestrator::Orchestrator;
use wiremock::MockServer;

/// Start mock servers for both backends: (gemini, openweather).
pub async fn mock_backends() -> (MockServer, MockServer) {
    (MockServer::start().await, MockServer::start().await)
}

/// Build an orchestrator wired to the mock backends.
pub fn test_orchestrator(gemini_server: &MockServer, weather_server: &MockServer) -> Orchestrator {
    let gemini = GeminiClient::new("test-gemini-key", gemini_server.uri(), "test-model").unwrap();
    let weather = OpenWeatherClient::new("test-weather-key", weather_server.uri()).unwrap();
    Orchestrator::new(gemini, weather)
}

/// Gemini response body with a single text candidate.
pub fn gemini_text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

/// OpenWeatherMap current-weather body for London.
pub fn london_weather_body() -> serde_json::Value {
    serde_json::json!({
        "name": "London",
        "sys": { "country": "GB" },
        "main": { "temp": 11.2, "feels_like": 10.1, "humidity": 81 },
        "weather": [{ "description": "scattered clouds" }],
        "wind": { "speed": 4.6 }
    })
}
