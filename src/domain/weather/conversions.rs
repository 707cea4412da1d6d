use chrono::{DateTime, FixedOffset, Utc};

use super::Units;

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[must_use]
pub fn unit_symbol(units: Units) -> &'static str {
    match units {
        Units::Metric => "°C",
        Units::Imperial => "°F",
    }
}

#[must_use]
pub fn wind_unit(units: Units) -> &'static str {
    match units {
        Units::Metric => "m/s",
        Units::Imperial => "mph",
    }
}

/// Rounds half away from zero, matching how every displayed temperature is
/// truncated. Values arrive already converted by the upstream API.
#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn format_temperature(value: f64, units: Units) -> String {
    format!("{}{}", round_temp(value), unit_symbol(units))
}

#[must_use]
pub fn format_wind_speed(speed: f64, units: Units) -> String {
    format!("{speed} {}", wind_unit(units))
}

/// "Friday, Aug 21" for an epoch timestamp at the location's UTC offset.
#[must_use]
pub fn format_date(timestamp: i64, utc_offset_secs: i32) -> String {
    local_datetime(timestamp, utc_offset_secs).format("%A, %b %-d").to_string()
}

/// Three-letter weekday label used on forecast cards.
#[must_use]
pub fn day_label(timestamp: i64, utc_offset_secs: i32) -> String {
    local_datetime(timestamp, utc_offset_secs).format("%a").to_string()
}

pub(crate) fn local_datetime(timestamp: i64, utc_offset_secs: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(utc_offset_secs)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}
