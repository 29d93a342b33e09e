//! Lenient deserialization helpers
//!
//! Saved records come from browser forms and client-side storage, so numeric
//! fields may arrive as numbers, numeric strings, or not at all. The engine
//! must stay total over such input: instead of failing, malformed values
//! deserialize to `None` and readers substitute the documented defaults.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::DailyValue;

/// Wire format for record timestamps: space-separated, seconds precision,
/// no timezone designator.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An enum whose wire representation is a fixed set of label strings.
/// Unrecognized labels read as absent rather than erroring.
pub trait RecognizedLabel: Sized {
    fn from_label(label: &str) -> Option<Self>;
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize a number or numeric string into `Option<f64>`; anything else
/// reads as absent.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Deserialize a scalar or a per-day array into `Option<DailyValue>`.
pub fn lenient_daily<'de, D>(deserializer: D) -> Result<Option<DailyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Array(items) => Some(DailyValue::Series(
            items
                .iter()
                .map(|item| value_to_f64(item).unwrap_or(0.0))
                .collect(),
        )),
        other => value_to_f64(other).map(DailyValue::Scalar),
    }))
}

/// Deserialize an enum from its label string, falling back to absent on
/// unrecognized or non-string input.
pub fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: RecognizedLabel,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(T::from_label))
}

/// Serde adapter for `NaiveDateTime` in the platform's timestamp format.
/// Also accepts ISO-8601 and bare dates on input.
pub mod timestamp {
    use super::{NaiveDateTime, TIMESTAMP_FORMAT};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| {
                chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                    .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
            })
            .map_err(serde::de::Error::custom)
    }
}
