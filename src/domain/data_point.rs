// Raw API data points and their normalized form
use super::error::ChartError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Data point as delivered by the Insight API. Either axis may arrive as a
/// JSON string or a JSON number; both are kept as text until normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataPoint {
    #[serde(deserialize_with = "loose_string")]
    pub x_axis_value: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub y_axis_value: String,
}

impl RawDataPoint {
    pub fn new(x_axis_value: impl Into<String>, y_axis_value: impl Into<String>) -> Self {
        Self {
            x_axis_value: x_axis_value.into(),
            y_axis_value: y_axis_value.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Number(serde_json::Number),
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    // null collapses to an empty string, which normalization rejects as malformed
    Ok(match Option::<LooseValue>::deserialize(deserializer)? {
        Some(LooseValue::Text(text)) => text,
        Some(LooseValue::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    x_axis_date: Option<DateTime<Utc>>,
    x_axis_value: String,
    y_axis_value: f64,
}

impl DataPoint {
    /// Normalize a raw point. The x value is always retained as the category
    /// label; the date is only set when it parses as ISO-8601. A malformed
    /// value is reported at index 0; series callers re-index it.
    pub fn normalize(raw: RawDataPoint) -> Result<Self, ChartError> {
        let y_axis_value = parse_decimal(&raw.y_axis_value).ok_or(ChartError::MalformedValue {
            index: 0,
            value: raw.y_axis_value,
        })?;

        Ok(Self {
            x_axis_date: parse_iso8601(&raw.x_axis_value),
            x_axis_value: raw.x_axis_value,
            y_axis_value,
        })
    }

    pub fn x_axis_date(&self) -> Option<DateTime<Utc>> {
        self.x_axis_date
    }

    pub fn x_axis_value(&self) -> &str {
        &self.x_axis_value
    }

    pub fn y_axis_value(&self) -> f64 {
        self.y_axis_value
    }
}

/// Fixed-format ISO-8601 parsing, with or without fractional seconds
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

pub fn parse_decimal(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_normalize_dated_point() {
        let raw = RawDataPoint::new("2021-06-28T00:00:00.000Z", "15234");
        let point = DataPoint::normalize(raw).unwrap();

        assert_eq!(
            point.x_axis_date(),
            Some(Utc.with_ymd_and_hms(2021, 6, 28, 0, 0, 0).unwrap())
        );
        assert_eq!(point.y_axis_value(), 15234.0);
        assert_eq!(point.x_axis_value(), "2021-06-28T00:00:00.000Z");
    }

    #[test]
    fn test_normalize_without_fractional_seconds() {
        let raw = RawDataPoint::new("2021-06-28T13:45:00+02:00", "1.5");
        let point = DataPoint::normalize(raw).unwrap();

        assert_eq!(
            point.x_axis_date(),
            Some(Utc.with_ymd_and_hms(2021, 6, 28, 11, 45, 0).unwrap())
        );
        assert_eq!(point.y_axis_value(), 1.5);
    }

    #[test]
    fn test_normalize_categorical_point() {
        let point = DataPoint::normalize(RawDataPoint::new("iPhone13,2", "42")).unwrap();
        assert_eq!(point.x_axis_date(), None);
        assert_eq!(point.x_axis_value(), "iPhone13,2");
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        for value in ["abc", "", " 12", "NaN", "inf", "-infinity"] {
            let result = DataPoint::normalize(RawDataPoint::new("a", value));
            assert_eq!(
                result,
                Err(ChartError::MalformedValue { index: 0, value: value.to_string() }),
                "value {:?} should be malformed",
                value
            );
        }
    }

    #[test]
    fn test_deserialize_loosely_typed_fields() {
        let json = r#"[
            {"xAxisValue": "2021-06-28T00:00:00.000Z", "yAxisValue": "12"},
            {"xAxisValue": 2021, "yAxisValue": 3.5},
            {"xAxisValue": "macOS", "yAxisValue": null},
            {"xAxisValue": "iOS"}
        ]"#;
        let raw: Vec<RawDataPoint> = serde_json::from_str(json).unwrap();

        assert_eq!(raw[0], RawDataPoint::new("2021-06-28T00:00:00.000Z", "12"));
        assert_eq!(raw[1], RawDataPoint::new("2021", "3.5"));
        assert_eq!(raw[2], RawDataPoint::new("macOS", ""));
        assert_eq!(raw[3], RawDataPoint::new("iOS", ""));
    }
}
