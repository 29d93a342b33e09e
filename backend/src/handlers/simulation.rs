//! HTTP handlers for forage balance simulations

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use shared::models::{FarmRecord, SimulationResult};

use crate::error::{AppError, AppResult};
use crate::services::SimulationService;
use crate::AppState;

/// Request body for a single-record simulation
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub simulation_record: FarmRecord,
    #[validate(range(min = 1))]
    pub prediction_period: u32,
}

/// Request body for a grouped multi-record simulation
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRecordsRequest {
    pub simulation_records: Vec<FarmRecord>,
    #[validate(range(min = 1))]
    pub prediction_period: u32,
}

/// Simulate a single farm record over the requested horizon
pub async fn simulate(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> AppResult<Json<SimulationResult>> {
    request.validate().map_err(|e| AppError::Validation {
        field: "predictionPeriod".to_string(),
        message: e.to_string(),
    })?;

    let service = SimulationService::new(state.config.simulation.max_prediction_days);
    let result = service.simulate(
        &request.simulation_record,
        request.prediction_period as usize,
    )?;
    Ok(Json(result))
}

/// Simulate a batch of records, one combined result per group
pub async fn simulate_records(
    State(state): State<AppState>,
    Json(request): Json<SimulateRecordsRequest>,
) -> AppResult<Json<Vec<SimulationResult>>> {
    request.validate().map_err(|e| AppError::Validation {
        field: "predictionPeriod".to_string(),
        message: e.to_string(),
    })?;

    let service = SimulationService::new(state.config.simulation.max_prediction_days);
    let results = service.simulate_grouped(
        &request.simulation_records,
        request.prediction_period as usize,
    )?;
    Ok(Json(results))
}
