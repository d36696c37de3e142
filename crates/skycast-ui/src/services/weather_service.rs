//! Weather backend: async weather fetching.
//! All network work runs off the UI thread; results sent via mpsc,
//! tagged with the generation of the request that started them.

use std::sync::Arc;

use skycast_weather::{FetchError, WeatherProvider, WeatherSnapshot};

use crate::bridge;
use crate::models::weather_model::FetchRequest;

/// Error type for weather operations
#[derive(Debug, Clone)]
pub enum WeatherError {
    NotFound(String),
    Network(String),
    Malformed(String),
    NotInitialized,
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::NotFound(city) => write!(f, "City not found: {}", city),
            WeatherError::Network(s) => write!(f, "Weather error: {}", s),
            WeatherError::Malformed(s) => write!(f, "Malformed weather data: {}", s),
            WeatherError::NotInitialized => write!(f, "Weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherError {}

impl From<FetchError> for WeatherError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotFound(city) => WeatherError::NotFound(city),
            FetchError::Network(e) => WeatherError::Network(e.to_string()),
            FetchError::MalformedResponse(s) => WeatherError::Malformed(s),
        }
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching weather data, tagged with the request generation
    FetchDone {
        generation: u64,
        result: Result<WeatherSnapshot, WeatherError>,
    },
}

/// Request a weather fetch asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    provider: Arc<WeatherProvider>,
    request: FetchRequest,
) {
    let tx = tx.clone();
    let runtime = match bridge::get_runtime() {
        Some(r) => r,
        None => {
            let _ = tx.send(WeatherServiceMessage::FetchDone {
                generation: request.generation,
                result: Err(WeatherError::NotInitialized),
            });
            return;
        }
    };

    runtime.spawn(async move {
        tracing::info!("Fetching weather for '{}' (generation {})", request.city, request.generation);
        let result = provider
            .fetch(&request.city, request.unit)
            .await
            .map_err(WeatherError::from);
        let _ = tx.send(WeatherServiceMessage::FetchDone {
            generation: request.generation,
            result,
        });
    });
}

/// Dispatch a fetch through the globally wired provider and channel.
/// Returns false when the bridge has not been initialized.
pub fn dispatch(request: FetchRequest) -> bool {
    let (Some(tx), Some(provider)) = (bridge::get_weather_service_tx(), bridge::get_weather_provider())
    else {
        tracing::warn!("Weather service not initialized; dropping fetch request");
        return false;
    };
    request_fetch(&tx, provider, request);
    true
}
