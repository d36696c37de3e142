//! Screen state for the weather view.
//!
//! User intents (change city, change unit, refresh) bump a generation
//! counter and return a [`FetchRequest`] for the caller to dispatch.
//! Completions arrive as [`WeatherServiceMessage`]s; any completion whose
//! generation is not the latest one is discarded, so overlapping fetches
//! always resolve to the most recent request regardless of arrival order.

use skycast_core::AppError;
use skycast_weather::{UnitPreference, WeatherSnapshot};

use crate::services::weather_service::WeatherServiceMessage;

/// A fetch the model has asked for. Carries the generation tag used to
/// discard stale completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub city: String,
    pub unit: UnitPreference,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct WeatherModel {
    city: String,
    unit: UnitPreference,
    generation: u64,
    loading: bool,
    error_message: Option<String>,
    snapshot: Option<WeatherSnapshot>,
}

impl WeatherModel {
    pub fn new(city: &str, unit: UnitPreference) -> Self {
        Self {
            city: city.trim().to_string(),
            unit,
            ..Self::default()
        }
    }

    /// Change the displayed city and start a new fetch.
    /// Empty input is ignored and starts nothing.
    pub fn set_city(&mut self, city: &str) -> Option<FetchRequest> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }
        self.city = city.to_string();
        Some(self.begin_fetch())
    }

    /// Change the unit preference and start a new fetch.
    /// Selecting the already-active unit starts nothing.
    pub fn set_unit(&mut self, unit: UnitPreference) -> Option<FetchRequest> {
        if unit == self.unit {
            return None;
        }
        self.unit = unit;
        Some(self.begin_fetch())
    }

    /// Re-fetch the current city. Starts nothing when no city is set.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        if self.city.is_empty() {
            return None;
        }
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.error_message = None;
        FetchRequest {
            city: self.city.clone(),
            unit: self.unit,
            generation: self.generation,
        }
    }

    /// Fold a service completion into the model.
    ///
    /// On failure the previous snapshot stays displayed; only the error
    /// message changes.
    pub fn apply(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::FetchDone { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        "Discarding stale fetch completion (generation {} superseded by {})",
                        generation,
                        self.generation
                    );
                    return;
                }
                self.loading = false;
                match result {
                    Ok(snapshot) => {
                        tracing::info!("Weather updated for '{}'", snapshot.location_name);
                        self.snapshot = Some(snapshot);
                        self.error_message = None;
                    }
                    Err(e) => {
                        tracing::warn!("Weather fetch failed: {}", e);
                        self.error_message = Some(AppError::from(e).user_message().to_string());
                    }
                }
            }
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn unit(&self) -> UnitPreference {
        self.unit
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }
}
