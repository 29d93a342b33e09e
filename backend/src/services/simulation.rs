//! Simulation service wrapping the shared forage balance engine

use shared::models::{FarmRecord, SimulationResult};
use shared::simulation::{simulate_record, simulate_records};
use shared::validation::validate_prediction_period;

use crate::error::{AppError, AppResult};

/// Simulation service enforcing the configured horizon ceiling before
/// delegating to the pure engine.
#[derive(Clone)]
pub struct SimulationService {
    max_prediction_days: usize,
}

impl SimulationService {
    pub fn new(max_prediction_days: usize) -> Self {
        Self {
            max_prediction_days,
        }
    }

    /// Run a single-record simulation
    pub fn simulate(
        &self,
        record: &FarmRecord,
        prediction_period: usize,
    ) -> AppResult<SimulationResult> {
        self.check_period(prediction_period)?;

        tracing::debug!(
            group_id = %record.group_id,
            prediction_period,
            "running single-record simulation"
        );

        Ok(simulate_record(record, prediction_period)?)
    }

    /// Run a grouped simulation over a batch of records
    pub fn simulate_grouped(
        &self,
        records: &[FarmRecord],
        prediction_period: usize,
    ) -> AppResult<Vec<SimulationResult>> {
        self.check_period(prediction_period)?;

        tracing::debug!(
            record_count = records.len(),
            prediction_period,
            "running grouped simulation"
        );

        Ok(simulate_records(records, prediction_period)?)
    }

    fn check_period(&self, prediction_period: usize) -> AppResult<()> {
        validate_prediction_period(prediction_period, self.max_prediction_days).map_err(
            |message| AppError::Validation {
                field: "predictionPeriod".to_string(),
                message,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_horizon_beyond_ceiling() {
        let service = SimulationService::new(30);
        let record = FarmRecord::default();
        let err = service.simulate(&record, 31).unwrap_err();
        assert!(matches!(err, AppError::Validation { field, .. } if field == "predictionPeriod"));
    }

    #[test]
    fn rejects_zero_horizon() {
        let service = SimulationService::new(30);
        let record = FarmRecord::default();
        assert!(service.simulate(&record, 0).is_err());
    }

    #[test]
    fn simulates_default_record_within_bounds() {
        let service = SimulationService::new(30);
        let record = FarmRecord::default();
        let result = service.simulate(&record, 7).unwrap();
        assert_eq!(result.dates.len(), 7);
        assert!(!result.recommendation.is_empty());
    }

    #[test]
    fn grouped_simulation_returns_one_result_per_group() {
        let service = SimulationService::new(30);
        let mut a = FarmRecord::default();
        a.group_id = "farm 1".to_string();
        let mut b = FarmRecord::default();
        b.group_id = "farm 2".to_string();

        let results = service.simulate_grouped(&[a, b], 5).unwrap();
        assert_eq!(results.len(), 2);
    }
}
