#![allow(dead_code)]

use chrono::Utc;
use skycast::{
    cli::{Cli, UnitsArg},
    domain::weather::{
        DailyForecast, ForecastSample, Location, Units, WeatherSample, WeatherSnapshot,
        aggregate_daily,
    },
};

pub fn test_cli() -> Cli {
    Cli {
        city: None,
        units: UnitsArg::Metric,
        api_key: "test-key".to_string(),
        lat: None,
        lon: None,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: true,
        ascii_icons: false,
        emoji_icons: false,
        // Spawned fetch tasks must never leave the test host; completions are
        // injected by hand instead.
        weather_url: Some("http://127.0.0.1:9".to_string()),
        geo_url: Some("http://127.0.0.1:9".to_string()),
    }
}

pub fn cli_with_weather_url(url: impl Into<String>) -> Cli {
    Cli {
        weather_url: Some(url.into()),
        ..test_cli()
    }
}

pub fn stockholm() -> Location {
    Location {
        name: "Stockholm".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
        country: Some("SE".to_string()),
        state: None,
    }
}

pub fn reykjavik() -> Location {
    Location {
        name: "Reykjavik".to_string(),
        latitude: 64.1466,
        longitude: -21.9426,
        country: Some("IS".to_string()),
        state: None,
    }
}

// 2026-08-17T00:00Z, a Monday.
pub const DAY_START: i64 = 1_786_924_800;
pub const THREE_HOURS: i64 = 3 * 3600;

pub fn current_sample(code: i32) -> WeatherSample {
    WeatherSample {
        timestamp: DAY_START + 12 * 3600,
        temperature: 17.3,
        feels_like: 16.1,
        temp_min: 14.0,
        temp_max: 19.5,
        humidity: 62,
        pressure: 1013,
        wind_speed: 4.2,
        condition_code: code,
        condition_description: "light rain".to_string(),
        visibility_m: Some(10_000),
        sunrise: DAY_START + 5 * 3600,
        sunset: DAY_START + 20 * 3600,
    }
}

pub fn forecast_sample(timestamp: i64, temp_min: f64, temp_max: f64, code: i32) -> ForecastSample {
    ForecastSample {
        timestamp,
        temperature: (temp_min + temp_max) / 2.0,
        temp_min,
        temp_max,
        humidity: 70,
        wind_speed: 3.5,
        condition_code: code,
        condition_description: "fixture".to_string(),
    }
}

pub fn two_day_series() -> Vec<ForecastSample> {
    let mut samples = Vec::new();
    for slot in 0..8 {
        samples.push(forecast_sample(
            DAY_START + slot * THREE_HOURS,
            10.0,
            18.0,
            500,
        ));
    }
    for slot in 0..8 {
        samples.push(forecast_sample(
            DAY_START + 86_400 + slot * THREE_HOURS,
            5.0,
            9.0,
            800,
        ));
    }
    samples
}

pub fn snapshot(location: Location, units: Units) -> WeatherSnapshot {
    let forecast = two_day_series();
    let daily: Vec<DailyForecast> = aggregate_daily(&forecast, 0);
    WeatherSnapshot {
        location,
        current: current_sample(500),
        forecast,
        daily,
        units,
        utc_offset_secs: 0,
        fetched_at: Utc::now(),
    }
}

pub fn current_weather_json() -> &'static str {
    r#"{
      "coord": {"lon": 18.0686, "lat": 59.3293},
      "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
      "main": {"temp": 17.3, "feels_like": 16.1, "temp_min": 14.0, "temp_max": 19.5, "pressure": 1013, "humidity": 62},
      "visibility": 10000,
      "wind": {"speed": 4.2, "deg": 220},
      "dt": 1786968000,
      "sys": {"country": "SE", "sunrise": 1786942800, "sunset": 1786996800},
      "timezone": 7200,
      "name": "Stockholm"
    }"#
}

pub fn forecast_json() -> String {
    let mut entries = Vec::new();
    for day in 0..2 {
        for slot in 0..8 {
            let dt = DAY_START + day * 86_400 + slot * THREE_HOURS;
            let (lo, hi, code) = if day == 0 {
                (10.0, 18.0, 500)
            } else {
                (5.0, 9.0, 800)
            };
            entries.push(format!(
                r#"{{"dt": {dt},
                   "main": {{"temp": {mid}, "feels_like": {mid}, "temp_min": {lo}, "temp_max": {hi}, "pressure": 1010, "humidity": 70}},
                   "weather": [{{"id": {code}, "main": "x", "description": "fixture", "icon": "10d"}}],
                   "wind": {{"speed": 3.5}}}}"#,
                mid = (lo + hi) / 2.0,
            ));
        }
    }
    format!(
        r#"{{"cod": "200", "cnt": 16, "list": [{}],
            "city": {{"id": 1, "name": "Stockholm", "country": "SE", "timezone": 0,
                      "sunrise": 1786942800, "sunset": 1786996800}}}}"#,
        entries.join(",")
    )
}
