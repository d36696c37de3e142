use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    /// Value for the provider's `units` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Celsius => "metric",
            Self::Fahrenheit => "imperial",
        }
    }

    /// Display symbol for temperatures in this unit
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Display categories mapped from provider condition icon codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCondition {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
    /// Placeholder for codes outside the mapping table. The provider's
    /// code space is larger than the five icons we ship; an unrecognized
    /// code must not masquerade as a sunny day.
    #[default]
    Unknown,
}

impl DisplayCondition {
    /// Convert a provider icon code (e.g. "01d", "13n") to a display category.
    ///
    /// Exact-match lookup over a fixed table; codes outside the table map
    /// to `Unknown`.
    pub fn from_icon_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => Self::Clear,
            "02d" | "02n" => Self::Cloud,
            "03d" | "03n" | "04d" | "04n" => Self::Drizzle,
            "09d" | "09n" | "10d" | "10n" => Self::Rain,
            "13d" | "13n" => Self::Snow,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloud => "Cloudy",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Unknown => "Unknown",
        }
    }

    /// Get icon asset name for the view layer
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloud => "cloud",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Unknown => "unknown",
        }
    }
}

/// Whether an icon code describes a daytime observation ("01d" vs "01n")
pub fn is_daytime_code(code: &str) -> bool {
    code.ends_with('d')
}

/// Hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub condition: DisplayCondition,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub condition: DisplayCondition,
}

/// Formatted weather record for one city at one point in time.
///
/// Created fresh on every successful fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country_code: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub is_daytime: bool,
    pub condition: DisplayCondition,
    pub unit: UnitPreference,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DayForecast>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch adapter errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No matching location: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_code_clear() {
        assert_eq!(DisplayCondition::from_icon_code("01d"), DisplayCondition::Clear);
        assert_eq!(DisplayCondition::from_icon_code("01n"), DisplayCondition::Clear);
    }

    #[test]
    fn test_icon_code_cloud() {
        assert_eq!(DisplayCondition::from_icon_code("02d"), DisplayCondition::Cloud);
        assert_eq!(DisplayCondition::from_icon_code("02n"), DisplayCondition::Cloud);
    }

    #[test]
    fn test_icon_code_drizzle() {
        assert_eq!(DisplayCondition::from_icon_code("03d"), DisplayCondition::Drizzle);
        assert_eq!(DisplayCondition::from_icon_code("03n"), DisplayCondition::Drizzle);
        assert_eq!(DisplayCondition::from_icon_code("04d"), DisplayCondition::Drizzle);
        assert_eq!(DisplayCondition::from_icon_code("04n"), DisplayCondition::Drizzle);
    }

    #[test]
    fn test_icon_code_rain() {
        assert_eq!(DisplayCondition::from_icon_code("09d"), DisplayCondition::Rain);
        assert_eq!(DisplayCondition::from_icon_code("09n"), DisplayCondition::Rain);
        assert_eq!(DisplayCondition::from_icon_code("10d"), DisplayCondition::Rain);
        assert_eq!(DisplayCondition::from_icon_code("10n"), DisplayCondition::Rain);
    }

    #[test]
    fn test_icon_code_snow() {
        assert_eq!(DisplayCondition::from_icon_code("13d"), DisplayCondition::Snow);
        assert_eq!(DisplayCondition::from_icon_code("13n"), DisplayCondition::Snow);
    }

    #[test]
    fn test_unrecognized_code_maps_to_unknown() {
        // Mist (50d) and thunderstorm (11n) are outside the table and
        // must not be mislabeled as clear skies
        assert_eq!(DisplayCondition::from_icon_code("50d"), DisplayCondition::Unknown);
        assert_eq!(DisplayCondition::from_icon_code("11n"), DisplayCondition::Unknown);
        assert_eq!(DisplayCondition::from_icon_code(""), DisplayCondition::Unknown);
        assert_ne!(DisplayCondition::from_icon_code("50d"), DisplayCondition::Clear);
    }

    #[test]
    fn test_daytime_codes() {
        assert!(is_daytime_code("01d"));
        assert!(!is_daytime_code("01n"));
        assert!(!is_daytime_code(""));
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(DisplayCondition::Clear.description(), "Clear");
        assert_eq!(DisplayCondition::Unknown.description(), "Unknown");
    }

    #[test]
    fn test_condition_icon_name() {
        assert_eq!(DisplayCondition::Snow.icon_name(), "snow");
        assert_eq!(DisplayCondition::Unknown.icon_name(), "unknown");
    }

    #[test]
    fn test_unit_query_values() {
        assert_eq!(UnitPreference::Celsius.query_value(), "metric");
        assert_eq!(UnitPreference::Fahrenheit.query_value(), "imperial");
    }
}
