//! Weather fetch adapter for Skycast
//!
//! Queries an OpenWeatherMap-compatible HTTP API and reshapes its JSON
//! responses into the flat snapshot the view layer displays.

pub mod provider;
pub mod response;
pub mod types;

pub use provider::WeatherProvider;
pub use types::*;
