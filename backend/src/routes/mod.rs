//! Route definitions for the Forage Balance Simulation Server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Current weather for a location
        .route("/weather", get(handlers::get_weather))
        // Single-record simulation
        .route("/simulate", post(handlers::simulate))
        // Grouped multi-record simulation
        .route("/simulateRecords", post(handlers::simulate_records))
}
