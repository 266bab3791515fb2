use crate::constants::{
    API_BASE_ENV, API_KEY_ENV, DEFAULT_LANG, DEFAULT_UNITS, LANG_ENV, OPENWEATHER_API_BASE,
    UNITS_ENV,
};

/// Provider settings, read once at startup and handed to the fetcher
#[derive(Clone)]
pub struct WeatherConfig {
    /// API key sent as `appid`; checked at call time, not here
    pub api_key: Option<String>,
    pub base_url: String,
    pub lang: String,
    pub units: String,
}

impl WeatherConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            api_key: get(API_KEY_ENV),
            base_url: get(API_BASE_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENWEATHER_API_BASE.to_string()),
            lang: get(LANG_ENV).unwrap_or_else(|| DEFAULT_LANG.to_string()),
            units: get(UNITS_ENV).unwrap_or_else(|| DEFAULT_UNITS.to_string()),
        }
    }

    /// Configuration against `base_url` with the given key and default settings
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENWEATHER_API_BASE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            units: DEFAULT_UNITS.to_string(),
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .field("units", &self.units)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = WeatherConfig::from_lookup(lookup_from(&[]));
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.lang, "kr");
        assert_eq!(config.units, "metric");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = WeatherConfig::from_lookup(lookup_from(&[
            ("OPENWEATHER_API_KEY", "secret"),
            ("OPENWEATHER_API_BASE", "http://localhost:8080/"),
            ("OPENWEATHER_LANG", "en"),
            ("OPENWEATHER_UNITS", "imperial"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.lang, "en");
        assert_eq!(config.units, "imperial");
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let config = WeatherConfig::from_lookup(lookup_from(&[("OPENWEATHER_API_KEY", "  ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = WeatherConfig::with_api_key("http://localhost", "secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
