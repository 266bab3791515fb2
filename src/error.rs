use reqwest::StatusCode;
use thiserror::Error;

/// Configuration problems surfaced to the caller
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "OpenWeatherMap API is not configured. Please set the OPENWEATHER_API_KEY environment variable."
    )]
    MissingApiKey,
}

/// Failures of a single provider request.
///
/// These never leave the fetcher: they are logged and turned into an absent payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("OpenWeatherMap API error! status: {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Coordinates outside the geographic range
#[derive(Debug, Error)]
#[error("Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}
