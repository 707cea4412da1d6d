pub mod conditions;
pub mod conversions;
pub mod daily;

pub use conditions::{
    ConditionGroup, IconMode, condition_group, condition_icon, condition_particle, is_daytime,
    is_daytime_at,
};
pub use conversions::{
    celsius_to_fahrenheit, day_label, fahrenheit_to_celsius, format_date, format_temperature,
    format_wind_speed, round_temp, unit_symbol, wind_unit,
};
pub use daily::aggregate_daily;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unit system sent upstream on every fetch; the API returns values already
/// converted, so the client never re-converts fetched data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }

    /// Value of the `units` query parameter understood by OpenWeatherMap.
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

impl Location {
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            state: None,
        }
    }

    /// Fallback location used when geolocation fails for any reason.
    pub fn default_fallback() -> Self {
        Self {
            name: "New York".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            country: Some("US".to_string()),
            state: None,
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.state, &self.country) {
            (Some(state), Some(country)) => format!("{}, {}, {}", self.name, state, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// A point-in-time reading in the units that were requested upstream.
/// Immutable once fetched.
#[derive(Debug, Clone)]
pub struct WeatherSample {
    pub timestamp: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub condition_code: i32,
    pub condition_description: String,
    pub visibility_m: Option<u32>,
    pub sunrise: i64,
    pub sunset: i64,
}

/// One 3-hour-resolution entry of the 5-day forecast series.
#[derive(Debug, Clone)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub condition_code: i32,
    pub condition_description: String,
}

/// Aggregate of all forecast samples sharing a local calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub day_label: String,
    pub condition_code: i32,
    pub condition_description: String,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// Everything the dashboard knows about the weather at one location. The
/// provider replaces this wholesale on every successful refresh; it is never
/// merged with a previous snapshot.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: WeatherSample,
    pub forecast: Vec<ForecastSample>,
    pub daily: Vec<DailyForecast>,
    pub units: Units,
    pub utc_offset_secs: i32,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn is_day(&self) -> bool {
        is_daytime(self.current.sunrise, self.current.sunset)
    }

    #[must_use]
    pub fn current_temp(&self) -> i32 {
        round_temp(self.current.temperature)
    }

    #[must_use]
    pub fn high_low_today(&self) -> (i32, i32) {
        (
            round_temp(self.current.temp_max),
            round_temp(self.current.temp_min),
        )
    }
}
