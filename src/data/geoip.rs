use reqwest::Client;
use serde::Deserialize;

/// Coordinates reported for the caller's public IP address. The terminal
/// stand-in for a browser geolocation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Best-effort lookup; `None` for any failure (transport, status, decode,
/// missing fields) so the caller can fall back to the default location
/// without caring why.
pub async fn detect_position() -> Option<GeoPosition> {
    detect_position_from("https://ipapi.co/json/").await
}

pub async fn detect_position_from(url: &str) -> Option<GeoPosition> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .ok()?;
    let response: IpApiResponse = client
        .get(url)
        .send()
        .await
        .ok()?
        .error_for_status()
        .ok()?
        .json()
        .await
        .ok()?;
    Some(GeoPosition {
        latitude: response.latitude?,
        longitude: response.longitude?,
    })
}
