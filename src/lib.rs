//! MCP server exposing OpenWeatherMap alerts and current conditions as tools.

pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use error::{ConfigError, FetchError, InvalidCoordinates};
pub use fetcher::WeatherFetcher;
pub use models::{Coordinate, CoordinatesRequest, WeatherPayload};
pub use service::Weather;
