pub mod weather_service;

pub use weather_service::{request_fetch, WeatherError, WeatherServiceMessage};
