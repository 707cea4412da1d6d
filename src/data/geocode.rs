use reqwest::Client;
use serde::Deserialize;

use super::FetchError;
use crate::domain::weather::Location;

const GEO_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Maximum number of candidates requested from the search endpoint. The cap
/// lives in the query so the provider never trims or reorders results.
const SEARCH_LIMIT: u8 = 5;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GEO_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// City-name search. Returns candidates exactly as the API ordered them,
    /// capped upstream at [`SEARCH_LIMIT`]; an unknown name is an empty list,
    /// not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, FetchError> {
        let response = self
            .client
            .get(format!("{}/direct", self.base_url))
            .query(&[
                ("q", query.to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let payload: Vec<GeoEntry> = FetchError::from_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;

        Ok(payload.into_iter().map(GeoEntry::into_location).collect())
    }

    /// Resolves coordinates to a display name for the geolocated start-up
    /// location.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<Location>, FetchError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("limit", "1".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let payload: Vec<GeoEntry> = FetchError::from_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;

        Ok(payload.into_iter().next().map(GeoEntry::into_location))
    }
}

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
    state: Option<String>,
}

impl GeoEntry {
    fn into_location(self) -> Location {
        Location {
            name: self.name,
            latitude: self.lat,
            longitude: self.lon,
            country: self.country,
            state: self.state,
        }
    }
}
