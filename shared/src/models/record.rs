//! Farm record model, the simulation input unit

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de;
use super::{HerdProperties, SoilParameters, WeatherObservation};

/// GPS coordinates, nullable until geolocation resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lon: Option<f64>,
}

/// Land use feeding the forage yield model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForageData {
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub arable_area: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub grassland_area: Option<f64>,
    /// Share of legumes in the sward, percent.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub legume_share: Option<f64>,
    /// Nitrogen input in kg per hectare.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub nitrogen_input: Option<f64>,
}

impl ForageData {
    /// Hectares assumed when an area field is absent or malformed.
    pub const DEFAULT_AREA_HA: f64 = 1.0;
}

/// One saved farm observation: site, weather, soil, herd, and land use at a
/// point in time. Records sharing a `group_id` describe the same farm across
/// time and are chained by the group aggregator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmRecord {
    /// Assigned at save time (sequence length), not globally unique.
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "group_id", default = "default_group_id")]
    pub group_id: String,
    #[serde(default)]
    pub name: String,
    /// Anchor day for this record's projection.
    #[serde(with = "de::timestamp")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub weather: WeatherObservation,
    #[serde(default)]
    pub soil_params: SoilParameters,
    #[serde(default)]
    pub herd_properties: HerdProperties,
    #[serde(default)]
    pub forage_data: ForageData,
}

fn default_group_id() -> String {
    "farm 1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_original_wire_shape() {
        let json = r#"{
            "id": 2,
            "group_id": "north pasture",
            "name": "Simulation 2024-05-01 08:00:00",
            "date": "2024-05-01 08:00:00",
            "coordinates": {"lat": 47.1, "lon": 9.3},
            "weather": {
                "temperature": 22.5,
                "humidity": 65,
                "precipitation": "5",
                "radiation": 18.2,
                "description": "light rain"
            },
            "soilParams": {"soilType": "Peat", "waterRetention": 0.25, "nutrientContent": "Medium"},
            "herdProperties": {"breed": "Holstein", "milkProduction": 25, "herdSize": 60},
            "forageData": {"arableArea": 10, "grasslandArea": 20}
        }"#;
        let record: FarmRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.group_id, "north pasture");
        assert_eq!(record.date.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-05-01 08:00:00");
        assert_eq!(record.weather.precipitation_on(0), 5.0);
        assert_eq!(record.forage_data.grassland_area, Some(20.0));
    }

    #[test]
    fn bare_date_parses_to_midnight() {
        let record: FarmRecord =
            serde_json::from_str(r#"{"date": "2024-01-01"}"#).unwrap();
        assert_eq!(
            record.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(record.group_id, "farm 1");
    }
}
