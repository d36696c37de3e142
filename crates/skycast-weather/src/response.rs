//! Wire-format decoding for the provider's JSON bodies.
//!
//! Every field the view displays is modeled as `Option` and promoted to
//! `FetchError::MalformedResponse` when absent, so provider schema drift
//! surfaces as a typed error instead of a serde panic deep in a fetch.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::types::{
    is_daytime_code, DayForecast, DisplayCondition, FetchError, HourlyForecast, UnitPreference,
    WeatherSnapshot,
};

/// Hourly entries kept in the snapshot (24h of 3-hour provider steps)
const HOURLY_WINDOW: usize = 8;

/// Response body of the current-conditions endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: Option<String>,
    pub sys: Option<SysSection>,
    pub main: Option<MainSection>,
    pub wind: Option<WindSection>,
    #[serde(default)]
    pub weather: Vec<WeatherSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SysSection {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainSection {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindSection {
    pub speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherSection {
    pub icon: Option<String>,
}

/// Response body of the forecast endpoint (3-hourly list)
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    pub dt: i64,
    pub main: Option<MainSection>,
    #[serde(default)]
    pub weather: Vec<WeatherSection>,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, FetchError> {
    value.ok_or_else(|| FetchError::MalformedResponse(format!("missing field: {field}")))
}

/// Combine the two decoded bodies into a display snapshot.
pub(crate) fn build_snapshot(
    current: CurrentResponse,
    forecast: ForecastResponse,
    unit: UnitPreference,
) -> Result<WeatherSnapshot, FetchError> {
    let location_name = require(current.name, "name")?;
    let main = require(current.main, "main")?;
    let temperature = require(main.temp, "main.temp")?;
    let humidity = require(main.humidity, "main.humidity")?;
    let wind_speed = require(current.wind.and_then(|w| w.speed), "wind.speed")?;
    let icon = require(
        current.weather.into_iter().next().and_then(|w| w.icon),
        "weather[0].icon",
    )?;

    // Country is absent for some locations; not worth failing the fetch
    let country_code = current.sys.and_then(|s| s.country).unwrap_or_default();

    let hourly = hourly_forecast(&forecast.list)?;
    let daily = daily_forecast(&forecast.list)?;

    Ok(WeatherSnapshot {
        location_name,
        country_code,
        temperature,
        humidity: humidity.round().clamp(0.0, 100.0) as u8,
        wind_speed,
        is_daytime: is_daytime_code(&icon),
        condition: DisplayCondition::from_icon_code(&icon),
        unit,
        hourly,
        daily,
        fetched_at: Utc::now(),
    })
}

fn decode_entry(entry: &ForecastEntry) -> Result<(DateTime<Utc>, f64, DisplayCondition), FetchError> {
    let time = DateTime::from_timestamp(entry.dt, 0)
        .ok_or_else(|| FetchError::MalformedResponse("list[].dt out of range".to_string()))?;
    let temperature = require(entry.main.as_ref().and_then(|m| m.temp), "list[].main.temp")?;
    let icon = require(
        entry.weather.first().and_then(|w| w.icon.as_deref()),
        "list[].weather[0].icon",
    )?;
    Ok((time, temperature, DisplayCondition::from_icon_code(icon)))
}

/// First day's worth of 3-hourly entries, in provider order.
fn hourly_forecast(entries: &[ForecastEntry]) -> Result<Vec<HourlyForecast>, FetchError> {
    entries
        .iter()
        .take(HOURLY_WINDOW)
        .map(|entry| {
            let (time, temperature, condition) = decode_entry(entry)?;
            Ok(HourlyForecast {
                time,
                temperature,
                condition,
            })
        })
        .collect()
}

/// Collapse the 3-hourly list into one entry per calendar date.
///
/// High/low are the extremes over the date's entries; the displayed
/// condition comes from the entry nearest midday.
fn daily_forecast(entries: &[ForecastEntry]) -> Result<Vec<DayForecast>, FetchError> {
    let mut by_date: BTreeMap<NaiveDate, Vec<(u32, f64, DisplayCondition)>> = BTreeMap::new();

    for entry in entries {
        let (time, temperature, condition) = decode_entry(entry)?;
        by_date
            .entry(time.date_naive())
            .or_default()
            .push((time.hour(), temperature, condition));
    }

    let days = by_date
        .into_iter()
        .map(|(date, samples)| {
            let high = samples.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
            let low = samples.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
            let condition = samples
                .iter()
                .min_by_key(|s| s.0.abs_diff(12))
                .map(|s| s.2)
                .unwrap_or_default();
            DayForecast {
                date,
                high,
                low,
                condition,
            }
        })
        .collect();

    Ok(days)
}
