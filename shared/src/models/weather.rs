//! Weather observation model

use serde::{Deserialize, Serialize};

use super::de;

/// A numeric weather input: either a single scalar broadcast to every
/// simulated day, or an explicit per-day series (forecast data).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DailyValue {
    Scalar(f64),
    Series(Vec<f64>),
}

impl DailyValue {
    /// Value for the given day. Scalars broadcast to every day; series clamp
    /// to their last entry when the horizon outruns them. An empty series
    /// reads as absent.
    pub fn on_day(&self, day: usize) -> Option<f64> {
        match self {
            DailyValue::Scalar(v) => Some(*v),
            DailyValue::Series(vs) => vs.get(day).or_else(|| vs.last()).copied(),
        }
    }
}

/// Weather conditions attached to a farm record.
///
/// The precipitation field is a binary-ish indicator derived from the
/// textual description at fetch time (5.0 when it mentions rain, else 0.0),
/// not a measured depth. Radiation is the Hargreaves-Samani estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default, deserialize_with = "de::lenient_daily")]
    pub temperature: Option<DailyValue>,
    #[serde(default, deserialize_with = "de::lenient_daily")]
    pub humidity: Option<DailyValue>,
    #[serde(default, deserialize_with = "de::lenient_daily")]
    pub precipitation: Option<DailyValue>,
    #[serde(default, deserialize_with = "de::lenient_daily")]
    pub radiation: Option<DailyValue>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl WeatherObservation {
    pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
    pub const DEFAULT_HUMIDITY_PCT: f64 = 20.0;
    pub const DEFAULT_PRECIPITATION: f64 = 5.0;
    pub const DEFAULT_RADIATION: f64 = 15.0;

    /// Temperature for the given day, falling back to the form default.
    pub fn temperature_on(&self, day: usize) -> f64 {
        self.temperature
            .as_ref()
            .and_then(|v| v.on_day(day))
            .unwrap_or(Self::DEFAULT_TEMPERATURE_C)
    }

    pub fn humidity_on(&self, day: usize) -> f64 {
        self.humidity
            .as_ref()
            .and_then(|v| v.on_day(day))
            .unwrap_or(Self::DEFAULT_HUMIDITY_PCT)
    }

    pub fn precipitation_on(&self, day: usize) -> f64 {
        self.precipitation
            .as_ref()
            .and_then(|v| v.on_day(day))
            .unwrap_or(Self::DEFAULT_PRECIPITATION)
    }

    pub fn radiation_on(&self, day: usize) -> f64 {
        self.radiation
            .as_ref()
            .and_then(|v| v.on_day(day))
            .unwrap_or(Self::DEFAULT_RADIATION)
    }
}

impl Default for WeatherObservation {
    fn default() -> Self {
        Self {
            temperature: Some(DailyValue::Scalar(Self::DEFAULT_TEMPERATURE_C)),
            humidity: Some(DailyValue::Scalar(Self::DEFAULT_HUMIDITY_PCT)),
            precipitation: Some(DailyValue::Scalar(Self::DEFAULT_PRECIPITATION)),
            radiation: Some(DailyValue::Scalar(Self::DEFAULT_RADIATION)),
            description: String::new(),
            country: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_to_every_day() {
        let value = DailyValue::Scalar(21.5);
        assert_eq!(value.on_day(0), Some(21.5));
        assert_eq!(value.on_day(29), Some(21.5));
    }

    #[test]
    fn series_clamps_to_last_entry() {
        let value = DailyValue::Series(vec![10.0, 12.0, 14.0]);
        assert_eq!(value.on_day(1), Some(12.0));
        assert_eq!(value.on_day(7), Some(14.0));
        assert_eq!(DailyValue::Series(vec![]).on_day(0), None);
    }

    #[test]
    fn lenient_parsing_accepts_strings_and_arrays() {
        let json = r#"{
            "temperature": "21.5",
            "humidity": [60, "70", null],
            "precipitation": {"bogus": true},
            "description": "light rain"
        }"#;
        let weather: WeatherObservation = serde_json::from_str(json).unwrap();
        assert_eq!(weather.temperature_on(0), 21.5);
        assert_eq!(weather.humidity_on(1), 70.0);
        // Non-numeric array entries degrade to zero, not an error.
        assert_eq!(weather.humidity_on(2), 0.0);
        // Malformed scalar falls back to the form default.
        assert_eq!(
            weather.precipitation_on(0),
            WeatherObservation::DEFAULT_PRECIPITATION
        );
        // Missing radiation falls back as well.
        assert_eq!(
            weather.radiation_on(0),
            WeatherObservation::DEFAULT_RADIATION
        );
    }
}
