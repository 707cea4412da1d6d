pub mod geocode;
pub mod geoip;
pub mod openweather;

use thiserror::Error;

/// Everything that can go wrong talking to the upstream weather API. All
/// variants are recoverable; the provider folds them into one user-visible
/// message and the next fetch attempt clears them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("could not decode upstream payload: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    pub(crate) fn from_status(response: reqwest::Response) -> Result<reqwest::Response, Self> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(FetchError::Status { status })
        }
    }
}
