use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::response::{build_snapshot, CurrentResponse, ForecastResponse};
use crate::types::{FetchError, UnitPreference, WeatherSnapshot};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Async client for an OpenWeatherMap-compatible provider.
///
/// One fetch issues two GETs (current conditions + forecast list) and maps
/// them into a [`WeatherSnapshot`]. No retry and no caching; a user action
/// triggers exactly one fetch cycle.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl WeatherProvider {
    /// Create a provider against the given API base URL (e.g.
    /// `https://api.openweathermap.org/data/2.5`).
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions and forecast for a city.
    pub async fn fetch(
        &self,
        city: &str,
        unit: UnitPreference,
    ) -> Result<WeatherSnapshot, FetchError> {
        tracing::info!("Fetching weather for {} ({})", city, unit.query_value());

        let current: CurrentResponse = self.get_json("weather", city, unit).await?;
        let forecast: ForecastResponse = self.get_json("forecast", city, unit).await?;

        let snapshot = build_snapshot(current, forecast, unit)?;
        tracing::info!(
            "Weather for {} fetched: {} {}{}",
            snapshot.location_name,
            snapshot.condition.description(),
            snapshot.temperature,
            unit.symbol()
        );
        Ok(snapshot)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        unit: UnitPreference,
    ) -> Result<T, FetchError> {
        let url = self.endpoint_url(endpoint, city, unit);
        tracing::debug!("GET {}/{}", self.base_url, endpoint);

        let response = self.client.get(url).send().await?;

        // The provider answers 404 for unknown city names
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(city.to_string()));
        }
        let response = response.error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }

    fn endpoint_url(&self, endpoint: &str, city: &str, unit: UnitPreference) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), endpoint);
        url.set_path(&path);
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("units", unit.query_value())
            .append_pair("appid", &self.api_key)
            .finish();
        url
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn provider() -> WeatherProvider {
        let base = Url::parse("https://api.example.com/data/2.5").unwrap();
        WeatherProvider::new(base, "test-key").unwrap()
    }

    #[test]
    fn test_endpoint_url_query_parameters() {
        let url = provider().endpoint_url("weather", "San Francisco", UnitPreference::Fahrenheit);
        assert_eq!(url.path(), "/data/2.5/weather");

        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert!(pairs.contains(&("q".to_string(), "San Francisco".to_string())));
        assert!(pairs.contains(&("units".to_string(), "imperial".to_string())));
        assert!(pairs.contains(&("appid".to_string(), "test-key".to_string())));
    }

    #[test]
    fn test_endpoint_url_trailing_slash_base() {
        let base = Url::parse("https://api.example.com/data/2.5/").unwrap();
        let provider = WeatherProvider::new(base, "k").unwrap();
        let url = provider.endpoint_url("forecast", "Oslo", UnitPreference::Celsius);
        assert_eq!(url.path(), "/data/2.5/forecast");
    }
}
