use chrono::{Local, TimeZone};
use std::fmt::Display;

use crate::models::{AlertRecord, Coordinate, WeatherPayload, Wind};

const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description";
const UNKNOWN_LOCATION: &str = "Unknown location";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Report returned when the provider could not be reached or answered badly
pub fn format_fetch_failure(coordinate: Coordinate) -> String {
    format!("Failed to retrieve weather data for coordinates: {coordinate}.")
}

/// Formats the payload's alerts into a human-readable string
pub fn format_alerts(coordinate: Coordinate, payload: &WeatherPayload) -> String {
    let alerts = match payload.alerts.as_deref() {
        Some(alerts) if !alerts.is_empty() => alerts,
        _ => return format!("No active weather alerts for ({coordinate})"),
    };

    let blocks: Vec<String> = alerts.iter().map(format_alert).collect();
    format!(
        "Active weather alerts for ({coordinate}):\n\n{}",
        blocks.join("\n")
    )
}

fn format_alert(alert: &AlertRecord) -> String {
    [
        format!("Event: {}", or_placeholder(text(&alert.event), UNKNOWN)),
        format!("Sender: {}", or_placeholder(text(&alert.sender_name), UNKNOWN)),
        format!("Start: {}", or_placeholder(alert.start.and_then(local_time), UNKNOWN)),
        format!("End: {}", or_placeholder(alert.end.and_then(local_time), UNKNOWN)),
        format!(
            "Description: {}",
            or_placeholder(text(&alert.description), NO_DESCRIPTION)
        ),
        "---".to_string(),
    ]
    .join("\n")
}

/// Formats current conditions into a human-readable string
pub fn format_forecast(coordinate: Coordinate, payload: &WeatherPayload) -> String {
    let name = or_placeholder(text(&payload.name), UNKNOWN_LOCATION);
    let weather = or_placeholder(
        payload
            .weather
            .as_deref()
            .and_then(|conditions| conditions.first())
            .and_then(|condition| text(&condition.description)),
        NO_DESCRIPTION,
    );

    let main = payload.main.as_ref();
    let temp = or_placeholder(main.and_then(|m| m.temp).map(celsius), UNKNOWN);
    let feels_like = or_placeholder(main.and_then(|m| m.feels_like).map(celsius), UNKNOWN);
    let humidity = or_placeholder(
        main.and_then(|m| m.humidity).map(|h| format!("{h}%")),
        UNKNOWN,
    );
    let wind = or_placeholder(payload.wind.as_ref().and_then(format_wind), UNKNOWN);

    format!(
        "OpenWeatherMap Forecast for {name} ({coordinate}):\n\n\
         weather: {weather}\n\
         temp: {temp} (feels like: {feels_like})\n\
         humidity: {humidity}\n\
         wind: {wind}"
    )
}

/// `"{speed} m/s, {deg}°"`, keeping whichever half is present
fn format_wind(wind: &Wind) -> Option<String> {
    let parts: Vec<String> = [
        wind.speed.map(|speed| format!("{speed} m/s")),
        wind.deg.map(|deg| format!("{deg}\u{00b0}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn celsius(value: f64) -> String {
    format!("{value}\u{00b0}C")
}

/// Renders epoch seconds in the local timezone; zero counts as unset
fn local_time(epoch_secs: i64) -> Option<String> {
    if epoch_secs == 0 {
        return None;
    }
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|time| time.format(TIMESTAMP_FORMAT).to_string())
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn or_placeholder<T: Display>(value: Option<T>, placeholder: &str) -> String {
    match value {
        Some(value) => value.to_string(),
        None => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seoul() -> Coordinate {
        Coordinate::new(37.5, 127.0).unwrap()
    }

    fn payload(value: serde_json::Value) -> WeatherPayload {
        WeatherPayload::from_value(value).unwrap()
    }

    #[test]
    fn test_fetch_failure_text() {
        assert_eq!(
            format_fetch_failure(seoul()),
            "Failed to retrieve weather data for coordinates: 37.5, 127.0."
        );
    }

    #[test]
    fn test_no_alerts_when_field_missing_or_empty() {
        let expected = "No active weather alerts for (37.5, 127.0)";
        assert_eq!(format_alerts(seoul(), &payload(json!({}))), expected);
        assert_eq!(
            format_alerts(seoul(), &payload(json!({ "alerts": [] }))),
            expected
        );
    }

    #[test]
    fn test_single_alert_with_defaults() {
        let report = format_alerts(
            seoul(),
            &payload(json!({ "alerts": [{ "event": "Heat Wave", "sender_name": "KMA" }] })),
        );

        assert!(report.starts_with("Active weather alerts for (37.5, 127.0):\n\n"));
        assert!(report.contains("Event: Heat Wave"));
        assert!(report.contains("Sender: KMA"));
        assert!(report.contains("Start: Unknown"));
        assert!(report.contains("End: Unknown"));
        assert!(report.contains("Description: No description"));
    }

    #[test]
    fn test_empty_alert_renders_all_placeholders() {
        let report = format_alerts(seoul(), &payload(json!({ "alerts": [{}] })));
        assert_eq!(
            report,
            "Active weather alerts for (37.5, 127.0):\n\n\
             Event: Unknown\n\
             Sender: Unknown\n\
             Start: Unknown\n\
             End: Unknown\n\
             Description: No description\n\
             ---"
        );
    }

    #[test]
    fn test_alerts_keep_input_order() {
        let report = format_alerts(
            seoul(),
            &payload(json!({ "alerts": [
                { "event": "Typhoon" },
                { "event": "Heavy Rain" },
                { "event": "Typhoon" }
            ] })),
        );

        assert_eq!(report.matches("---").count(), 3);
        assert_eq!(report.matches("Event: Typhoon").count(), 2);
        let typhoon = report.find("Event: Typhoon").unwrap();
        let rain = report.find("Event: Heavy Rain").unwrap();
        assert!(typhoon < rain);
    }

    #[test]
    fn test_alert_timestamps_are_local_time() {
        let start = 1_720_000_000;
        let report = format_alerts(
            seoul(),
            &payload(json!({ "alerts": [{ "start": start, "end": 0, "description": "" }] })),
        );

        let expected = Local
            .timestamp_opt(start, 0)
            .single()
            .unwrap()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        assert!(report.contains(&format!("Start: {expected}")));
        assert!(report.contains("End: Unknown"));
        assert!(report.contains("Description: No description"));
    }

    #[test]
    fn test_full_forecast() {
        let report = format_forecast(
            seoul(),
            &payload(json!({
                "name": "Seoul",
                "weather": [{ "description": "맑음" }, { "description": "ignored" }],
                "main": { "temp": 21.5, "feels_like": 20.0, "humidity": 40 },
                "wind": { "speed": 3.6, "deg": 200 }
            })),
        );

        assert_eq!(
            report,
            "OpenWeatherMap Forecast for Seoul (37.5, 127.0):\n\n\
             weather: 맑음\n\
             temp: 21.5\u{00b0}C (feels like: 20\u{00b0}C)\n\
             humidity: 40%\n\
             wind: 3.6 m/s, 200\u{00b0}"
        );
    }

    #[test]
    fn test_empty_forecast_uses_placeholders() {
        let report = format_forecast(seoul(), &payload(json!({})));
        assert_eq!(
            report,
            "OpenWeatherMap Forecast for Unknown location (37.5, 127.0):\n\n\
             weather: No description\n\
             temp: Unknown (feels like: Unknown)\n\
             humidity: Unknown\n\
             wind: Unknown"
        );
    }

    #[test]
    fn test_zero_temperature_is_present() {
        let report = format_forecast(seoul(), &payload(json!({ "main": { "temp": 0 } })));
        assert!(report.contains("temp: 0\u{00b0}C (feels like: Unknown)"));
    }

    #[test]
    fn test_partial_wind() {
        let speed_only = format_forecast(seoul(), &payload(json!({ "wind": { "speed": 1.5 } })));
        assert!(speed_only.ends_with("wind: 1.5 m/s"));

        let deg_only = format_forecast(seoul(), &payload(json!({ "wind": { "deg": 90 } })));
        assert!(deg_only.ends_with("wind: 90\u{00b0}"));

        let neither = format_forecast(seoul(), &payload(json!({ "wind": {} })));
        assert!(neither.ends_with("wind: Unknown"));
    }
}
