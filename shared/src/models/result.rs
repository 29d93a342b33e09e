//! Simulation output models

use serde::{Deserialize, Serialize};

use super::FarmRecord;

/// Per-cow nutritional requirement for one day, scaled to the herd.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyFeedNeed {
    /// Energy requirement in kg milk-equivalent.
    #[serde(rename = "energy")]
    pub energy_kg: f64,
    /// Protein requirement in kg.
    #[serde(rename = "protein")]
    pub protein_kg: f64,
}

/// One day's production/needs/surplus triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySimulationPoint {
    pub forage_production_kg: f64,
    pub feed_needs_kg: f64,
    /// Always production minus needs; negative is a meaningful deficit.
    pub forage_surplus_kg: f64,
}

/// True time-weighted means over a result's concatenated daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesMeans {
    pub forage_production: f64,
    pub feed_needs: f64,
    pub forage_surplus: f64,
}

/// The combined outcome of simulating one record group.
///
/// All daily arrays are index-aligned with `dates`. `simulation_records`
/// carries one entry per simulated day (the originating record repeated),
/// which lets the recommendation generator re-scan which conditions applied
/// on which day. Constructed fresh per simulate call and never mutated after
/// recommendation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub simulation_records: Vec<FarmRecord>,
    #[serde(rename = "group_id")]
    pub group_id: String,
    pub dates: Vec<String>,
    pub forage_yield: Vec<f64>,
    pub feed_needs: Vec<f64>,
    pub daily_forage_production: Vec<f64>,
    pub daily_feed_needs: Vec<f64>,
    pub daily_forage_surplus: Vec<f64>,
    pub mean_forage_production: f64,
    pub mean_feed_needs: f64,
    pub mean_forage_surplus: f64,
    pub recommendation: String,
}

impl SimulationResult {
    /// An empty result shell for a group, ready for accumulation.
    pub fn empty(group_id: impl Into<String>) -> Self {
        Self {
            simulation_records: Vec::new(),
            group_id: group_id.into(),
            dates: Vec::new(),
            forage_yield: Vec::new(),
            feed_needs: Vec::new(),
            daily_forage_production: Vec::new(),
            daily_feed_needs: Vec::new(),
            daily_forage_surplus: Vec::new(),
            mean_forage_production: 0.0,
            mean_feed_needs: 0.0,
            mean_forage_surplus: 0.0,
            recommendation: String::new(),
        }
    }

    /// Time-weighted means over the concatenated daily series.
    ///
    /// The stored `mean_*` fields average per-record means by record count,
    /// matching the original semantics; this weighs every simulated day
    /// equally instead. The two differ whenever single-day anchors and the
    /// final multi-day horizon have different per-day magnitudes.
    pub fn series_means(&self) -> SeriesMeans {
        let len = self.daily_forage_surplus.len();
        if len == 0 {
            return SeriesMeans {
                forage_production: 0.0,
                feed_needs: 0.0,
                forage_surplus: 0.0,
            };
        }
        let n = len as f64;
        SeriesMeans {
            forage_production: self.daily_forage_production.iter().sum::<f64>() / n,
            feed_needs: self.daily_feed_needs.iter().sum::<f64>() / n,
            forage_surplus: self.daily_forage_surplus.iter().sum::<f64>() / n,
        }
    }
}
