use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::config::WeatherConfig;
use crate::constants::{CURRENT_WEATHER_PATH, USER_AGENT};
use crate::error::{ConfigError, FetchError};
use crate::models::{Coordinate, WeatherPayload};

/// Fetches current weather documents from OpenWeatherMap
#[derive(Debug)]
pub struct WeatherFetcher {
    client: Client,
    config: WeatherConfig,
}

impl WeatherFetcher {
    /// Creates a fetcher with its own HTTP client
    pub fn new(config: WeatherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    /// Fetches the current weather at `coordinate`.
    ///
    /// A missing API key is an error and no request is sent. Every other
    /// failure (bad status, network trouble, unparseable body) is logged and
    /// reported as `Ok(None)`.
    #[instrument(skip_all, fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<WeatherPayload>, ConfigError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey)?;

        match self.request(coordinate, api_key).await {
            Ok(Some(payload)) => Ok(Some(payload)),
            Ok(None) => {
                warn!("OpenWeatherMap API returned a null document");
                Ok(None)
            }
            Err(e) => {
                error!(error = %e, "OpenWeatherMap API call error");
                Ok(None)
            }
        }
    }

    async fn request(
        &self,
        coordinate: Coordinate,
        api_key: &str,
    ) -> Result<Option<WeatherPayload>, FetchError> {
        let url = format!("{}{}", self.config.base_url, CURRENT_WEATHER_PATH);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinate.latitude().to_string()),
                ("lon", coordinate.longitude().to_string()),
                ("appid", api_key.to_string()),
                ("lang", self.config.lang.clone()),
                ("units", self.config.units.clone()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(reqwest::Error::without_url)?;
        let value: Value = serde_json::from_slice(&body)?;

        Ok(WeatherPayload::from_value(value))
    }
}
