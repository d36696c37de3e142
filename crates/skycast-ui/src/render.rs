//! Pure text rendering of model state. No I/O here; callers decide where
//! the lines go.

use skycast_weather::{UnitPreference, WeatherSnapshot};

use crate::models::{FavoritesModel, WeatherModel};

fn wind_unit(unit: UnitPreference) -> &'static str {
    match unit {
        UnitPreference::Celsius => "m/s",
        UnitPreference::Fahrenheit => "mph",
    }
}

/// Current conditions block: location, temperature, humidity and wind.
pub fn render_current(model: &WeatherModel) -> Vec<String> {
    let mut lines = Vec::new();

    match model.snapshot() {
        Some(snapshot) => {
            if snapshot.country_code.is_empty() {
                lines.push(snapshot.location_name.clone());
            } else {
                lines.push(format!("{}, {}", snapshot.location_name, snapshot.country_code));
            }
            lines.push(format!(
                "{:.0}{}  {}",
                snapshot.temperature,
                snapshot.unit.symbol(),
                snapshot.condition.description()
            ));
            lines.push(format!(
                "Humidity {}%  Wind {:.1} {}",
                snapshot.humidity,
                snapshot.wind_speed,
                wind_unit(snapshot.unit)
            ));
        }
        None if model.loading() => lines.push("Loading...".to_string()),
        None => lines.push("No weather data".to_string()),
    }

    if let Some(message) = model.error_message() {
        lines.push(format!("! {}", message));
    }

    lines
}

/// Daily forecast strip, one line per day.
pub fn render_forecast(snapshot: &WeatherSnapshot) -> Vec<String> {
    snapshot
        .daily
        .iter()
        .map(|day| {
            format!(
                "{}  {:.0}{sym} / {:.0}{sym}  {}",
                day.date.format("%a"),
                day.low,
                day.high,
                day.condition.description(),
                sym = snapshot.unit.symbol()
            )
        })
        .collect()
}

/// Favorites list with a marker next to the currently shown city.
pub fn render_favorites(model: &FavoritesModel, current_city: &str) -> Vec<String> {
    if model.favorites().is_empty() {
        return vec!["No favorites yet".to_string()];
    }

    model
        .favorites()
        .iter()
        .map(|city| {
            let marker = if city == current_city { '>' } else { '-' };
            format!("{} {}", marker, city)
        })
        .collect()
}

/// Full screen: current conditions, forecast, favorites.
pub fn render_screen(weather: &WeatherModel, favorites: &FavoritesModel) -> Vec<String> {
    let mut lines = render_current(weather);

    if let Some(snapshot) = weather.snapshot() {
        if !snapshot.daily.is_empty() {
            lines.push(String::new());
            lines.extend(render_forecast(snapshot));
        }
    }

    lines.push(String::new());
    lines.push("Favorites:".to_string());
    lines.extend(render_favorites(favorites, weather.city()));

    lines
}
