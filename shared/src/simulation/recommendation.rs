//! Recommendation generator
//!
//! Turns an aggregated simulation result into a fixed-order advisory string.
//! Every rule appends a canonical sentence; there is no randomness and no
//! localization, so identical inputs always produce identical text.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::{
    Breed, FarmRecord, FeedSupplement, HealthStatus, NutrientLevel, SimulationResult,
    SoilParameters,
};

/// Condition flags aggregated over every contributing record entry.
///
/// The records array carries one entry per simulated day, so the same record
/// is scanned repeatedly; flags are booleans, which keeps the duplication
/// from multiplying advisory sentences.
#[derive(Debug, Default)]
struct ConditionFlags {
    high_temperature: bool,
    high_humidity: bool,
    low_radiation: bool,
    low_water_retention: bool,
    low_nutrients: bool,
    health_issues: bool,
    protein_supplement: bool,
    breed_counts: BTreeMap<Breed, usize>,
}

impl ConditionFlags {
    fn scan(records: &[FarmRecord]) -> Self {
        let mut flags = Self::default();

        for record in records {
            let weather = &record.weather;
            if weather.temperature_on(0) > 30.0 {
                flags.high_temperature = true;
            }
            if weather.humidity_on(0) > 80.0 {
                flags.high_humidity = true;
            }
            if weather.radiation_on(0) < 10.0 {
                flags.low_radiation = true;
            }

            let soil = &record.soil_params;
            if soil
                .water_retention
                .unwrap_or(SoilParameters::DEFAULT_WATER_RETENTION)
                < 0.2
            {
                flags.low_water_retention = true;
            }
            if soil.nutrient_content == Some(NutrientLevel::Low) {
                flags.low_nutrients = true;
            }

            let herd = &record.herd_properties;
            if herd.health_status == Some(HealthStatus::Sick) {
                flags.health_issues = true;
            }
            if herd.feed_supplement == Some(FeedSupplement::ProteinSupplement) {
                flags.protein_supplement = true;
            }
            if let Some(breed) = herd.breed {
                *flags.breed_counts.entry(breed).or_insert(0) += 1;
            }
        }

        flags
    }
}

/// Derive the advisory text for an aggregated simulation result.
pub fn generate_recommendation(result: &SimulationResult) -> String {
    let flags = ConditionFlags::scan(&result.simulation_records);
    let mut recommendation = String::new();

    // Surplus or deficit headline
    if result.mean_forage_surplus > 0.0 {
        let _ = write!(
            recommendation,
            "Surplus of {:.2} kg. ",
            result.mean_forage_surplus
        );
        recommendation.push_str("Consider storing excess forage or optimizing nitrogen input. ");
        if result.mean_forage_production > result.mean_feed_needs {
            recommendation.push_str("Evaluate increasing herd size or feed storage. ");
        }
    } else if result.mean_forage_surplus < 0.0 {
        let _ = write!(
            recommendation,
            "Deficit of {:.2} kg. ",
            result.mean_forage_surplus.abs()
        );
        recommendation
            .push_str("Increase nitrogen, adjust crop rotation, or purchase additional feed. ");
        if result.mean_feed_needs > result.mean_forage_production {
            recommendation
                .push_str("Review feeding strategy or consider alternative forage crops. ");
        }
    } else {
        recommendation
            .push_str("Forage production matches herd needs. Continue current practices. ");
    }

    // Weather conditions
    if flags.high_temperature {
        recommendation.push_str("Consider shade or irrigation for high temperatures. ");
    }
    if flags.high_humidity {
        recommendation.push_str("Improve ventilation to reduce disease risk. ");
    }
    if flags.low_radiation {
        recommendation.push_str("Adjust planting strategy for low radiation. ");
    }

    // Soil parameters
    if flags.low_water_retention {
        recommendation.push_str("Improve soil moisture management. ");
    }
    if flags.low_nutrients {
        recommendation.push_str("Apply additional fertilizers. ");
    }

    // Herd management
    if flags.health_issues {
        recommendation.push_str("Address health issues immediately. ");
    }
    if flags.protein_supplement {
        recommendation.push_str("Ensure sufficient protein in the diet. ");
    }
    for (breed, count) in &flags.breed_counts {
        if *count == 0 {
            continue;
        }
        // Only Holstein and Jersey have authored advice; other breeds are
        // intentionally silent.
        match breed {
            Breed::Holstein => {
                recommendation.push_str("Ensure high energy feed for Holsteins. ");
            }
            Breed::Jersey => {
                recommendation.push_str("Balance feed for Jersey's high butterfat milk. ");
            }
            _ => {}
        }
    }

    recommendation
}
