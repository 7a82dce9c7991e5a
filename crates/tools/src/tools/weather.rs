// Weather tool backed by the deterministic weather simulation

use crate::error::ToolError;
use crate::protocol::{ToolResult, ToolSchema};
use crate::tools::{json_schema_enum, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use chrono::{DateTime, Utc};
use kokoro_core::weather::{simulate_weather, TemperatureUnit, WeatherSnapshot};
use serde_json::{json, Map, Value};

/// Tool simulating current weather for a location.
pub struct WeatherTool;

impl WeatherTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

fn weather_fields(
    snapshot: &WeatherSnapshot,
    location: &str,
    unit: TemperatureUnit,
    now: DateTime<Utc>,
) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("location".to_string(), json!(location));
    fields.insert("condition".to_string(), json!(snapshot.condition.label()));
    fields.insert("temperature".to_string(), json!(snapshot.temperature_in(unit)));
    fields.insert("temperatureUnit".to_string(), json!(unit.symbol()));
    fields.insert("humidity".to_string(), json!(snapshot.humidity_pct));
    fields.insert("windSpeed".to_string(), json!(snapshot.wind_kmh));
    fields.insert("windUnit".to_string(), json!("km/h"));
    // The only non-reproducible field: report freshness, not simulated state.
    fields.insert(
        "lastUpdated".to_string(),
        json!(now.format("%Y-%m-%d %H:%M").to_string()),
    );
    fields
}

#[async_trait::async_trait]
impl Tool for WeatherTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getWeatherTool".to_string(),
            description: "Get current weather information for a specified location".to_string(),
            input_schema: json_schema_object(
                json!({
                    "location": json_schema_string("The city or location to get weather for"),
                    "unit": json_schema_enum(
                        "Temperature unit (celsius or fahrenheit)",
                        &["celsius", "fahrenheit"],
                        "celsius"
                    )
                }),
                vec!["location"],
            ),
        }
    }

    async fn execute(&self, args: Map<String, Value>) -> Result<ToolResult> {
        let location = args
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if location.is_empty() {
            return Ok(ToolError::Validation("Location is required".to_string()).into());
        }

        let unit = args
            .get("unit")
            .and_then(Value::as_str)
            .map(TemperatureUnit::parse)
            .unwrap_or_default();

        let snapshot = simulate_weather(location);
        Ok(ToolResult::fields(weather_fields(
            &snapshot,
            location,
            unit,
            Utc::now(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn args(location: &str, unit: Option<&str>) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("location".to_string(), json!(location));
        if let Some(unit) = unit {
            args.insert("unit".to_string(), json!(unit));
        }
        args
    }

    #[tokio::test]
    async fn missing_location_is_rejected() {
        let tool = WeatherTool::new();
        for empty in [Map::new(), args("", None)] {
            let result = tool.execute(empty).await.unwrap();
            assert_eq!(
                serde_json::to_value(&result).unwrap(),
                json!({"error": "Location is required"})
            );
        }
    }

    #[tokio::test]
    async fn repeated_calls_report_identical_weather() {
        let tool = WeatherTool::new();
        let first = tool.execute(args("London", None)).await.unwrap();
        let second = tool.execute(args("London", None)).await.unwrap();

        let first = first.as_fields().unwrap();
        let second = second.as_fields().unwrap();
        for key in ["condition", "temperature", "humidity", "windSpeed"] {
            assert_eq!(first.get(key), second.get(key), "field {}", key);
        }
    }

    #[tokio::test]
    async fn fahrenheit_matches_converted_celsius() {
        let tool = WeatherTool::new();
        let celsius = tool.execute(args("Tokyo", Some("celsius"))).await.unwrap();
        let fahrenheit = tool
            .execute(args("Tokyo", Some("fahrenheit")))
            .await
            .unwrap();

        let c = celsius.as_fields().unwrap();
        let f = fahrenheit.as_fields().unwrap();
        let base = c.get("temperature").unwrap().as_i64().unwrap();
        let converted = f.get("temperature").unwrap().as_i64().unwrap();
        assert_eq!(converted, (base as f64 * 9.0 / 5.0 + 32.0).round() as i64);
        assert_eq!(c.get("temperatureUnit"), Some(&json!("°C")));
        assert_eq!(f.get("temperatureUnit"), Some(&json!("°F")));
        // The condition does not depend on the unit.
        assert_eq!(c.get("condition"), f.get("condition"));
    }

    #[test]
    fn fields_are_shaped_with_minute_precision_timestamp() {
        let snapshot = simulate_weather("London");
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 45).unwrap();
        let fields = weather_fields(&snapshot, "London", TemperatureUnit::Celsius, now);

        assert_eq!(fields.get("location"), Some(&json!("London")));
        assert_eq!(fields.get("windUnit"), Some(&json!("km/h")));
        assert_eq!(fields.get("lastUpdated"), Some(&json!("2025-03-01 10:30")));

        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "location",
                "condition",
                "temperature",
                "temperatureUnit",
                "humidity",
                "windSpeed",
                "windUnit",
                "lastUpdated"
            ]
        );
    }
}
