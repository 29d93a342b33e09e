//! Group aggregator
//!
//! Chains the single-record simulator across records sharing a group
//! identity: every record except the newest contributes a single anchor day
//! of actuals, and the newest carries the full forward projection. The
//! chained series feed one combined result (and recommendation) per group.

use crate::models::{FarmRecord, SimulationResult};

use super::{project_record, recommendation, SimulationError};

/// Simulate a batch of records, returning one combined result per distinct
/// `group_id` in first-seen order. Input records are never mutated.
pub fn simulate_records(
    records: &[FarmRecord],
    prediction_period: usize,
) -> Result<Vec<SimulationResult>, SimulationError> {
    if prediction_period == 0 {
        return Err(SimulationError::InvalidPredictionPeriod(prediction_period));
    }

    // Partition by group, preserving first-seen group order. Group counts
    // are small enough that a linear scan beats hashing here.
    let mut groups: Vec<(String, Vec<&FarmRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(id, _)| *id == record.group_id) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.group_id.clone(), vec![record])),
        }
    }

    let mut results = Vec::with_capacity(groups.len());
    for (group_id, mut members) in groups {
        members.sort_by_key(|r| r.date);

        let mut combined = SimulationResult::empty(group_id);
        let member_count = members.len();

        for (index, record) in members.iter().enumerate() {
            let horizon = if index + 1 == member_count {
                prediction_period
            } else {
                1
            };
            let partial = project_record(record, horizon)?;

            combined.simulation_records.extend(partial.simulation_records);
            combined.dates.extend(partial.dates);
            combined.forage_yield.extend(partial.forage_yield);
            combined.feed_needs.extend(partial.feed_needs);
            combined
                .daily_forage_production
                .extend(partial.daily_forage_production);
            combined.daily_feed_needs.extend(partial.daily_feed_needs);
            combined
                .daily_forage_surplus
                .extend(partial.daily_forage_surplus);

            combined.mean_forage_production += partial.mean_forage_production;
            combined.mean_feed_needs += partial.mean_feed_needs;
            combined.mean_forage_surplus += partial.mean_forage_surplus;
        }

        // Average of per-record means, not a time-weighted mean over the
        // concatenated series. `SimulationResult::series_means` exposes the
        // weighted variant.
        let divisor = member_count as f64;
        combined.mean_forage_production /= divisor;
        combined.mean_feed_needs /= divisor;
        combined.mean_forage_surplus /= divisor;

        combined.recommendation = recommendation::generate_recommendation(&combined);
        results.push(combined);
    }

    Ok(results)
}
