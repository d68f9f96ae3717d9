//! Integration tests for the WeatherAPI client using wiremock
//!
//! These tests verify query-string construction (API key and URL-encoded
//! place name) and the handling of undecodable provider responses.

use integration_weatherapi::{WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// A realistic WeatherAPI payload; only `current.temp_c` matters
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "São Paulo",
            "region": "Sao Paulo",
            "country": "Brazil",
            "lat": -23.53,
            "lon": -46.62,
            "tz_id": "America/Sao_Paulo",
            "localtime": "2024-01-15 12:00"
        },
        "current": {
            "last_updated": "2024-01-15 11:45",
            "temp_c": 25.0,
            "temp_f": 77.0,
            "is_day": 1,
            "condition": {"text": "Sunny", "code": 1000},
            "wind_kph": 9.0,
            "humidity": 58,
            "cloud": 0
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> WeatherApiClient {
    let config = WeatherApiConfig {
        base_url: mock_server.uri(),
        api_key: SecretString::from("test-key"),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    WeatherApiClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn current_success_extracts_celsius() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let sample = client.current("São Paulo").await.expect("lookup should succeed");

    assert!((sample.temp_celsius - 25.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn request_carries_key_and_encoded_city() {
    let mock_server = MockServer::start().await;

    // wiremock matches against the decoded query value, so this verifies
    // the city survives URL encoding intact
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current("São Paulo").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn error_body_yields_parse_error() {
    let mock_server = MockServer::start().await;

    // WeatherAPI reports failures as a JSON error object without `current`
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current("Nowhereville").await;

    assert!(
        matches!(result, Err(WeatherError::Parse(_))),
        "Expected Parse, got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_json_yields_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current("São Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::Parse(_))),
        "Expected Parse, got: {result:?}"
    );
}

#[tokio::test]
async fn unreachable_provider_yields_unreachable_error() {
    let config = WeatherApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: SecretString::from("test-key"),
        timeout_secs: 1,
    };
    #[allow(clippy::expect_used)]
    let client = WeatherApiClient::new(config).expect("Failed to create client");

    let result = client.current("São Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::Unreachable(_))),
        "Expected Unreachable, got: {result:?}"
    );
}
