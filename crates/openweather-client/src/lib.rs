//! OpenWeatherMap weather lookup client.

mod client;
mod error;
mod types;

pub use client::OpenWeatherClient;
pub use error::WeatherError;
pub use types::WeatherReading;

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
        OpenWeatherClient::new("test-api-key", mock_server.uri()).unwrap()
    }

    fn london_body() -> serde_json::Value {
        serde_json::json!({
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 11.2, "feels_like": 10.1, "humidity": 81 },
            "weather": [{ "description": "scattered clouds" }],
            "wind": { "speed": 4.6 }
        })
    }

    #[tokio::test]
    async fn test_current_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-api-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let reading = client.current("London").await.unwrap();

        assert_eq!(reading.city, "London");
        assert_eq!(reading.country, "GB");
        assert_eq!(reading.temperature_c, 11.2);
        assert_eq!(reading.feels_like_c, 10.1);
        assert_eq!(reading.humidity_pct, 81);
        assert_eq!(reading.description, "Scattered Clouds");
        assert_eq!(reading.wind_speed_mps, 4.6);
    }

    #[tokio::test]
    async fn test_current_trims_city_for_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "New York"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "New York",
                "sys": { "country": "US" },
                "main": { "temp": 24.0, "feels_like": 25.3, "humidity": 60 },
                "weather": [{ "description": "clear sky" }],
                "wind": { "speed": 2.1 }
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let reading = client.current("  New York  ").await.unwrap();

        assert_eq!(reading.city, "New York");
    }

    #[tokio::test]
    async fn test_current_not_found_keeps_original_city() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.current("lonndonn today").await.unwrap_err();

        assert!(matches!(err, WeatherError::CityNotFound { .. }));
        // Message carries the argument as passed, not the title-cased form
        let message = err.to_string();
        assert!(message.contains("'lonndonn today'"));
        assert!(!message.contains("Lonndonn Today"));
    }

    #[tokio::test]
    async fn test_current_unauthorized_fixed_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);

        for city in ["London", "Paris", ""] {
            let err = client.current(city).await.unwrap_err();
            assert!(matches!(err, WeatherError::Unauthorized));
            assert_eq!(
                err.to_string(),
                "Weather API key is invalid or not activated yet. Please check your API key."
            );
        }
    }

    #[tokio::test]
    async fn test_current_other_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.current("London").await.unwrap_err();

        match err {
            WeatherError::Api { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_current_empty_conditions_is_missing_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "London",
                "sys": { "country": "GB" },
                "main": { "temp": 11.2, "feels_like": 10.1, "humidity": 81 },
                "weather": [],
                "wind": { "speed": 4.6 }
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.current("London").await.unwrap_err();

        assert!(matches!(err, WeatherError::MissingField("weather")));
    }

    #[tokio::test]
    async fn test_current_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "cod": 200, "message": 0 })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.current("London").await.unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
        assert!(err.to_string().starts_with("Error parsing weather data:"));
    }
}
