//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use shared::models::WeatherObservation;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for weather lookup
#[derive(Debug, Deserialize, Validate)]
pub struct LocationQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

/// Fetch current weather conditions for a location
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherObservation>> {
    query.validate().map_err(|e| AppError::Validation {
        field: "coordinates".to_string(),
        message: e.to_string(),
    })?;

    let observation = state.weather.current_observation(query.lat, query.lon).await?;
    Ok(Json(observation))
}
