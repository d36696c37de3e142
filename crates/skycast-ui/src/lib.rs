//! View-model layer: models own screen state, services run async work on
//! the shared runtime, and the bridge wires globals together at startup.
//! Results come back over an mpsc channel and are folded into the models
//! on the caller's thread.

pub mod bridge;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;

pub use models::favorites_model::FavoritesModel;
pub use models::weather_model::{FetchRequest, WeatherModel};
pub use services::{WeatherError, WeatherServiceMessage};
