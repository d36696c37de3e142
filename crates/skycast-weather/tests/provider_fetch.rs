//! Integration tests for the fetch adapter against a mock provider.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_weather::{DisplayCondition, FetchError, UnitPreference, WeatherProvider};

fn current_body() -> serde_json::Value {
    json!({
        "name": "London",
        "sys": { "country": "GB" },
        "main": { "temp": 11.5, "humidity": 54.0 },
        "wind": { "speed": 5.1 },
        "weather": [{ "icon": "01d" }]
    })
}

fn forecast_body() -> serde_json::Value {
    // Two 3-hourly samples on 2021-01-01, one on 2021-01-02
    json!({
        "list": [
            {
                "dt": 1_609_459_200,
                "main": { "temp": 4.0, "humidity": 60.0 },
                "weather": [{ "icon": "02d" }]
            },
            {
                "dt": 1_609_502_400,
                "main": { "temp": 9.0, "humidity": 55.0 },
                "weather": [{ "icon": "10d" }]
            },
            {
                "dt": 1_609_588_800,
                "main": { "temp": 1.0, "humidity": 70.0 },
                "weather": [{ "icon": "13d" }]
            }
        ]
    })
}

async fn provider_for(server: &MockServer) -> WeatherProvider {
    let base = Url::parse(&server.uri()).unwrap();
    WeatherProvider::new(base, "test-key").unwrap()
}

#[tokio::test]
async fn fetch_maps_provider_response_into_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let snapshot = provider.fetch("London", UnitPreference::Celsius).await.unwrap();

    assert_eq!(snapshot.location_name, "London");
    assert_eq!(snapshot.country_code, "GB");
    assert_eq!(snapshot.temperature, 11.5);
    assert_eq!(snapshot.humidity, 54);
    assert_eq!(snapshot.condition, DisplayCondition::Clear);
    assert!(snapshot.is_daytime);

    assert_eq!(snapshot.hourly.len(), 3);
    assert_eq!(snapshot.hourly[0].temperature, 4.0);
    assert_eq!(snapshot.hourly[1].condition, DisplayCondition::Rain);

    assert_eq!(snapshot.daily.len(), 2);
    assert_eq!(snapshot.daily[0].high, 9.0);
    assert_eq!(snapshot.daily[0].low, 4.0);
    assert_eq!(snapshot.daily[1].condition, DisplayCondition::Snow);
}

#[tokio::test]
async fn fetch_forwards_imperial_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let snapshot = provider.fetch("London", UnitPreference::Fahrenheit).await.unwrap();
    assert_eq!(snapshot.unit, UnitPreference::Fahrenheit);
}

#[tokio::test]
async fn unknown_city_yields_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.fetch("Atlantis", UnitPreference::Celsius).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(ref city) if city == "Atlantis"));
}

#[tokio::test]
async fn server_error_yields_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.fetch("London", UnitPreference::Celsius).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn undecodable_body_yields_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.fetch("London", UnitPreference::Celsius).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn missing_display_fields_yield_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "London" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": [] })))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.fetch("London", UnitPreference::Celsius).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn forecast_not_found_yields_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.fetch("London", UnitPreference::Celsius).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)));
}
