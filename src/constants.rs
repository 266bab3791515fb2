/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-openweather-server/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org";

/// Path of the current weather endpoint, relative to the base URL
pub const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Default response language
pub const DEFAULT_LANG: &str = "kr";

/// Default unit system
pub const DEFAULT_UNITS: &str = "metric";

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const API_BASE_ENV: &str = "OPENWEATHER_API_BASE";
pub const LANG_ENV: &str = "OPENWEATHER_LANG";
pub const UNITS_ENV: &str = "OPENWEATHER_UNITS";
