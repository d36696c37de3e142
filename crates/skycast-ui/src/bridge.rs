use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use skycast_weather::WeatherProvider;
use url::Url;

// Static tokio runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

// Weather services
static WEATHER_PROVIDER: OnceLock<Arc<WeatherProvider>> = OnceLock::new();

// Weather service channel
static WEATHER_SERVICE_TX: OnceLock<std::sync::mpsc::Sender<crate::services::WeatherServiceMessage>> =
    OnceLock::new();
static WEATHER_SERVICE_RX: OnceLock<
    Mutex<std::sync::mpsc::Receiver<crate::services::WeatherServiceMessage>>,
> = OnceLock::new();

/// Initialize the tokio runtime (call once at application startup)
fn get_or_init_runtime() -> Option<tokio::runtime::Handle> {
    if let Some(runtime) = RUNTIME.get() {
        return Some(runtime.handle().clone());
    }

    match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("skycast-tokio")
        .build()
    {
        Ok(runtime) => {
            let _ = RUNTIME.set(runtime);
            RUNTIME.get().map(|r| r.handle().clone())
        }
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            None
        }
    }
}

/// Initialize weather services from the loaded configuration.
/// Must be called before models request any fetches.
pub fn initialize_weather_services(config: &skycast_core::Config) -> bool {
    if get_or_init_runtime().is_none() {
        return false;
    }

    let base_url = match Url::parse(&config.api.base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Invalid weather API base URL '{}': {}", config.api.base_url, e);
            return false;
        }
    };

    if !config.api.is_configured() {
        tracing::warn!("Weather API key not configured - fetches will fail");
    }
    let api_key = config.api.api_key.clone().unwrap_or_default();

    let provider = match WeatherProvider::new(base_url, api_key) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            tracing::error!("Failed to create WeatherProvider: {}", e);
            return false;
        }
    };

    if WEATHER_PROVIDER.set(provider).is_err() {
        tracing::warn!("WeatherProvider already initialized");
    }

    tracing::info!("Weather services initialized successfully");
    true
}

/// Get the initialized weather provider for use by request_* calls
pub fn get_weather_provider() -> Option<Arc<WeatherProvider>> {
    WEATHER_PROVIDER.get().cloned()
}

/// Get the runtime handle (always available after any initialization)
pub fn get_runtime() -> Option<tokio::runtime::Handle> {
    RUNTIME.get().map(|r| r.handle().clone())
}

/// Initialize weather service channel. Call once when WeatherModel is first created.
/// Returns true if initialized (or already initialized).
pub fn init_weather_service_channel() -> bool {
    if WEATHER_SERVICE_TX.get().is_some() {
        return true;
    }
    let (tx, rx) = std::sync::mpsc::channel();
    WEATHER_SERVICE_TX.set(tx).ok();
    WEATHER_SERVICE_RX.set(Mutex::new(rx)).ok();
    true
}

/// Get weather service sender for request_* calls. None if init_weather_service_channel not called yet.
pub fn get_weather_service_tx(
) -> Option<std::sync::mpsc::Sender<crate::services::WeatherServiceMessage>> {
    WEATHER_SERVICE_TX.get().cloned()
}

/// Non-blocking recv from the weather service channel. Called by the poll loop.
pub fn try_recv_weather_message() -> Option<crate::services::WeatherServiceMessage> {
    let rx = WEATHER_SERVICE_RX.get()?;
    rx.lock().try_recv().ok()
}

/// Where the favorites list lives on disk.
pub fn favorites_path(config: &skycast_core::Config) -> PathBuf {
    config.config_dir.join("favorites.json")
}

/// Convert the configured unit preference into the fetch-layer one.
pub fn unit_from_config(unit: skycast_core::UnitPreference) -> skycast_weather::UnitPreference {
    match unit {
        skycast_core::UnitPreference::Celsius => skycast_weather::UnitPreference::Celsius,
        skycast_core::UnitPreference::Fahrenheit => skycast_weather::UnitPreference::Fahrenheit,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn unit_conversion_matches() {
        assert_eq!(
            unit_from_config(skycast_core::UnitPreference::Celsius),
            skycast_weather::UnitPreference::Celsius
        );
        assert_eq!(
            unit_from_config(skycast_core::UnitPreference::Fahrenheit),
            skycast_weather::UnitPreference::Fahrenheit
        );
    }

    #[test]
    fn channel_init_is_idempotent() {
        assert!(init_weather_service_channel());
        assert!(init_weather_service_channel());
        assert!(get_weather_service_tx().is_some());
    }
}
