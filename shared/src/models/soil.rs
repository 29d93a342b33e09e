//! Soil parameter model

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::de::{self, RecognizedLabel};

/// Recognized soil types. Unrecognized labels deserialize as absent and
/// behave neutrally in the growth model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SoilType {
    SandyLoam,
    ClayLoam,
    SiltLoam,
    Peat,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SiltLoam => "Silt Loam",
            SoilType::Peat => "Peat",
        }
    }
}

impl RecognizedLabel for SoilType {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Sandy Loam" => Some(SoilType::SandyLoam),
            "Clay Loam" => Some(SoilType::ClayLoam),
            "Silt Loam" => Some(SoilType::SiltLoam),
            "Peat" => Some(SoilType::Peat),
            _ => None,
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SoilType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Soil nutrient content level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NutrientLevel {
    Low,
    Medium,
    High,
}

impl NutrientLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientLevel::Low => "Low",
            NutrientLevel::Medium => "Medium",
            NutrientLevel::High => "High",
        }
    }
}

impl RecognizedLabel for NutrientLevel {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(NutrientLevel::Low),
            "Medium" => Some(NutrientLevel::Medium),
            "High" => Some(NutrientLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for NutrientLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NutrientLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Soil properties of a farm site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilParameters {
    #[serde(default, deserialize_with = "de::lenient_enum")]
    pub soil_type: Option<SoilType>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub water_retention: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_enum")]
    pub nutrient_content: Option<NutrientLevel>,
}

impl SoilParameters {
    /// FAO-56 style fallback when water retention is absent or malformed.
    pub const DEFAULT_WATER_RETENTION: f64 = 0.2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_soil_type_reads_as_absent() {
        let soil: SoilParameters =
            serde_json::from_str(r#"{"soilType": "Lunar Regolith", "waterRetention": "0.35"}"#)
                .unwrap();
        assert_eq!(soil.soil_type, None);
        assert_eq!(soil.water_retention, Some(0.35));
        assert_eq!(soil.nutrient_content, None);
    }

    #[test]
    fn labels_round_trip() {
        let soil = SoilParameters {
            soil_type: Some(SoilType::ClayLoam),
            water_retention: Some(0.1),
            nutrient_content: Some(NutrientLevel::High),
        };
        let json = serde_json::to_string(&soil).unwrap();
        let back: SoilParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.soil_type, Some(SoilType::ClayLoam));
        assert_eq!(back.nutrient_content, Some(NutrientLevel::High));
    }
}
