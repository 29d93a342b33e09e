//! Dairy herd model

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::de::{self, RecognizedLabel};

/// Recognized dairy breeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breed {
    Holstein,
    Jersey,
    Guernsey,
    Ayrshire,
}

impl Breed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Holstein => "Holstein",
            Breed::Jersey => "Jersey",
            Breed::Guernsey => "Guernsey",
            Breed::Ayrshire => "Ayrshire",
        }
    }

    /// Multiplier applied to per-cow feed demand.
    pub fn feed_factor(self) -> f64 {
        match self {
            Breed::Holstein => 1.2,
            Breed::Jersey => 1.1,
            Breed::Guernsey => 1.05,
            Breed::Ayrshire => 1.0,
        }
    }
}

impl RecognizedLabel for Breed {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Holstein" => Some(Breed::Holstein),
            "Jersey" => Some(Breed::Jersey),
            "Guernsey" => Some(Breed::Guernsey),
            "Ayrshire" => Some(Breed::Ayrshire),
            _ => None,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Breed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Herd health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Sick,
    Recovering,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Sick => "Sick",
            HealthStatus::Recovering => "Recovering",
        }
    }

    /// Sick and recovering animals need more feed per kg of milk.
    pub fn feed_factor(self) -> f64 {
        match self {
            HealthStatus::Sick => 1.3,
            HealthStatus::Recovering => 1.1,
            HealthStatus::Healthy => 1.0,
        }
    }
}

impl RecognizedLabel for HealthStatus {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Healthy" => Some(HealthStatus::Healthy),
            "Sick" => Some(HealthStatus::Sick),
            "Recovering" => Some(HealthStatus::Recovering),
            _ => None,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HealthStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Feed supplement regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeedSupplement {
    None,
    Grain,
    ProteinSupplement,
    VitaminSupplement,
}

impl FeedSupplement {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedSupplement::None => "None",
            FeedSupplement::Grain => "Grain",
            FeedSupplement::ProteinSupplement => "Protein Supplement",
            FeedSupplement::VitaminSupplement => "Vitamin Supplement",
        }
    }

    pub fn feed_factor(self) -> f64 {
        match self {
            FeedSupplement::ProteinSupplement => 1.2,
            FeedSupplement::VitaminSupplement => 1.05,
            FeedSupplement::None | FeedSupplement::Grain => 1.0,
        }
    }
}

impl RecognizedLabel for FeedSupplement {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "None" => Some(FeedSupplement::None),
            "Grain" => Some(FeedSupplement::Grain),
            "Protein Supplement" => Some(FeedSupplement::ProteinSupplement),
            "Vitamin Supplement" => Some(FeedSupplement::VitaminSupplement),
            _ => None,
        }
    }
}

impl fmt::Display for FeedSupplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeedSupplement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Herd composition and production level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerdProperties {
    #[serde(default, deserialize_with = "de::lenient_enum")]
    pub breed: Option<Breed>,
    /// Live weight per cow in kg.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub weight: Option<f64>,
    /// Days between calvings.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub calving_interval: Option<f64>,
    /// Milk production per cow per day, in kg.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub milk_production: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub fat_content: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub protein_content: Option<f64>,
    /// Average age in years.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_enum")]
    pub health_status: Option<HealthStatus>,
    #[serde(default, deserialize_with = "de::lenient_enum")]
    pub feed_supplement: Option<FeedSupplement>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub herd_size: Option<f64>,
}

impl HerdProperties {
    pub const DEFAULT_MILK_PRODUCTION_KG: f64 = 20.0;
    pub const DEFAULT_HERD_SIZE: f64 = 50.0;
}
