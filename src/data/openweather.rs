use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use super::FetchError;
use crate::domain::weather::{
    ForecastSample, Location, Units, WeatherSample, WeatherSnapshot, aggregate_daily,
};

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the two read-only OpenWeatherMap data endpoints: current
/// conditions and the 5-day / 3-hour forecast. The `units` parameter is
/// forwarded on every call so the returned values never need converting.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Forecast series plus the location's UTC offset, which daily aggregation
/// needs to bucket samples by local calendar date.
#[derive(Debug, Clone)]
pub struct ForecastSeries {
    pub samples: Vec<ForecastSample>,
    pub utc_offset_secs: i32,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch_current(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<WeatherSample, FetchError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.as_query().to_string()),
            ])
            .send()
            .await?;

        let payload: CurrentResponse = FetchError::from_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;

        Ok(payload.into_sample())
    }

    pub async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<ForecastSeries, FetchError> {
        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.as_query().to_string()),
            ])
            .send()
            .await?;

        let payload: ForecastResponse = FetchError::from_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;

        Ok(ForecastSeries {
            samples: payload.list.iter().map(ForecastEntry::to_sample).collect(),
            utc_offset_secs: payload.city.timezone,
        })
    }

    /// One full refresh: current conditions and the forecast series fetched
    /// concurrently with fail-fast join semantics. Either call failing fails
    /// the whole refresh; no partial snapshot is ever produced.
    pub async fn fetch_snapshot(
        &self,
        location: Location,
        units: Units,
    ) -> Result<WeatherSnapshot, FetchError> {
        let (current, series) = tokio::try_join!(
            self.fetch_current(location.latitude, location.longitude, units),
            self.fetch_forecast(location.latitude, location.longitude, units),
        )?;

        let daily = aggregate_daily(&series.samples, series.utc_offset_secs);

        Ok(WeatherSnapshot {
            location,
            current,
            forecast: series.samples,
            daily,
            units,
            utc_offset_secs: series.utc_offset_secs,
            fetched_at: Utc::now(),
        })
    }
}

fn primary_condition(weather: &[ConditionBlock]) -> (i32, String) {
    weather
        .first()
        .map(|w| (w.id, w.description.clone()))
        .unwrap_or((0, "unknown".to_string()))
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    dt: i64,
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    wind: WindBlock,
    sys: SysBlock,
    visibility: Option<u32>,
}

impl CurrentResponse {
    fn into_sample(self) -> WeatherSample {
        let (condition_code, condition_description) = primary_condition(&self.weather);
        WeatherSample {
            timestamp: self.dt,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            condition_code,
            condition_description,
            visibility_m: self.visibility,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
    city: CityBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
}

impl ForecastEntry {
    fn to_sample(&self) -> ForecastSample {
        let (condition_code, condition_description) = primary_condition(&self.weather);
        ForecastSample {
            timestamp: self.dt,
            temperature: self.main.temp,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            condition_code,
            condition_description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    id: i32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    #[serde(default)]
    timezone: i32,
}
