//! The simulation engine
//!
//! Deterministic pipeline from farm records to daily forage/feed series,
//! aggregated surplus statistics, and an advisory string. Everything here is
//! a pure function of its inputs: no clock reads, no I/O, no mutation of
//! caller-supplied records.

mod aggregate;
pub mod formulas;
pub mod recommendation;

pub use aggregate::simulate_records;

use chrono::Duration;
use thiserror::Error;

use crate::models::de::TIMESTAMP_FORMAT;
use crate::models::{DailySimulationPoint, FarmRecord, SimulationResult};

/// Errors surfaced by the simulation engine.
///
/// The engine is total over malformed record contents (defaults substitute
/// for bad values), so the only rejection is a degenerate horizon, which
/// would otherwise divide by zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("prediction period must be at least 1 day, got {0}")]
    InvalidPredictionPeriod(usize),
}

/// Simulate a single record over the given horizon, recommendation included.
pub fn simulate_record(
    record: &FarmRecord,
    prediction_period: usize,
) -> Result<SimulationResult, SimulationError> {
    let mut result = project_record(record, prediction_period)?;
    result.recommendation = recommendation::generate_recommendation(&result);
    Ok(result)
}

/// Project one record over the horizon without generating a recommendation.
/// The group aggregator concatenates several of these before deriving the
/// advisory text for the combined result.
pub(crate) fn project_record(
    record: &FarmRecord,
    prediction_period: usize,
) -> Result<SimulationResult, SimulationError> {
    if prediction_period == 0 {
        return Err(SimulationError::InvalidPredictionPeriod(prediction_period));
    }

    let forage_yield = formulas::calculate_forage_yield(
        prediction_period,
        &record.weather,
        &record.soil_params,
        &record.forage_data,
    );
    let feed_needs = formulas::calculate_feed_needs(prediction_period, &record.herd_properties);

    // Consecutive calendar days starting at the record's anchor date.
    let dates: Vec<String> = (0..prediction_period)
        .map(|i| {
            (record.date + Duration::days(i as i64))
                .format(TIMESTAMP_FORMAT)
                .to_string()
        })
        .collect();

    let daily: Vec<DailySimulationPoint> = forage_yield
        .iter()
        .zip(&feed_needs)
        .map(|(production, need)| DailySimulationPoint {
            forage_production_kg: *production,
            feed_needs_kg: need.energy_kg,
            forage_surplus_kg: production - need.energy_kg,
        })
        .collect();

    let day_count = prediction_period as f64;
    let mean_forage_production = daily
        .iter()
        .map(|d| d.forage_production_kg)
        .sum::<f64>()
        / day_count;
    let mean_feed_needs = daily.iter().map(|d| d.feed_needs_kg).sum::<f64>() / day_count;
    let mean_forage_surplus = daily.iter().map(|d| d.forage_surplus_kg).sum::<f64>() / day_count;

    Ok(SimulationResult {
        // One copy of the record per simulated day, so the recommendation
        // scan can see which conditions applied on which day.
        simulation_records: vec![record.clone(); prediction_period],
        group_id: record.group_id.clone(),
        dates,
        forage_yield: daily.iter().map(|d| d.forage_production_kg).collect(),
        feed_needs: feed_needs.iter().map(|n| n.energy_kg).collect(),
        daily_forage_production: daily.iter().map(|d| d.forage_production_kg).collect(),
        daily_feed_needs: daily.iter().map(|d| d.feed_needs_kg).collect(),
        daily_forage_surplus: daily.iter().map(|d| d.forage_surplus_kg).collect(),
        mean_forage_production,
        mean_feed_needs,
        mean_forage_surplus,
        recommendation: String::new(),
    })
}
