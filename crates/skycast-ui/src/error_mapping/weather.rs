use crate::services::weather_service::WeatherError as UiWeatherError;
use skycast_core::{AppError, WeatherError};

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::NotFound(city) => {
                AppError::Weather(WeatherError::LocationNotFound(city))
            }
            UiWeatherError::Network(s) => AppError::Weather(WeatherError::Network(s)),
            UiWeatherError::Malformed(s) => {
                AppError::Weather(WeatherError::MalformedResponse(s))
            }
            UiWeatherError::NotInitialized => AppError::Weather(WeatherError::ServiceUnavailable),
        }
    }
}
