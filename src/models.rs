use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::InvalidCoordinates;

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================
//
// Every field is optional and decoded leniently: a missing field, a `null`, or
// a value of the wrong JSON type all end up as `None`.

/// Current weather document returned by the provider
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherPayload {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub weather: Option<Vec<WeatherCondition>>,
    #[serde(deserialize_with = "lenient")]
    pub main: Option<MainReadings>,
    #[serde(deserialize_with = "lenient")]
    pub wind: Option<Wind>,
    #[serde(deserialize_with = "lenient_list")]
    pub alerts: Option<Vec<AlertRecord>>,
}

impl WeatherPayload {
    /// Decodes a parsed response body.
    ///
    /// A JSON `null` yields `None`; any other non-object document decodes to an
    /// empty payload.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        Some(serde_json::from_value(value).unwrap_or_default())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherCondition {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    #[serde(deserialize_with = "lenient")]
    pub temp: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub feels_like: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    #[serde(deserialize_with = "lenient")]
    pub speed: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub deg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlertRecord {
    #[serde(deserialize_with = "lenient")]
    pub sender_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub event: Option<String>,
    /// Epoch seconds
    #[serde(deserialize_with = "lenient")]
    pub start: Option<i64>,
    /// Epoch seconds
    #[serde(deserialize_with = "lenient")]
    pub end: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], but a malformed element becomes an empty record instead
/// of discarding the whole sequence.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };

    Ok(Some(
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
    ))
}

// ============================================================================
// Coordinates
// ============================================================================

/// A validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Renders as `lat, lon`, always with a fractional part (`127.0`)
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}", self.latitude, self.longitude)
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CoordinatesRequest {
    /// Latitude of the location
    #[schemars(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude of the location
    #[schemars(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl CoordinatesRequest {
    pub fn coordinate(&self) -> Result<Coordinate, InvalidCoordinates> {
        Coordinate::new(self.latitude, self.longitude)
    }
}
