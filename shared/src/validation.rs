//! Validation utilities for the forage balance engine
//!
//! Light checks applied at the API boundary before records reach the
//! simulator; the simulator itself substitutes defaults for anything missing.

// ============================================================================
// Simulation Input Validations
// ============================================================================

/// Validate a prediction horizon against the configured ceiling
pub fn validate_prediction_period(days: usize, max_days: usize) -> Result<(), String> {
    if days == 0 {
        return Err("Prediction period must be at least 1 day".to_string());
    }
    if days > max_days {
        return Err(format!(
            "Prediction period must not exceed {max_days} days"
        ));
    }
    Ok(())
}

/// Validate min/max daily temperatures are consistent
pub fn validate_temperature_range(temp_min: f64, temp_max: f64) -> Result<(), &'static str> {
    if !temp_min.is_finite() || !temp_max.is_finite() {
        return Err("Temperatures must be finite values");
    }
    if temp_max < temp_min {
        return Err("Maximum temperature cannot be below minimum temperature");
    }
    Ok(())
}

// ============================================================================
// Geographic Validations
// ============================================================================

/// Validate WGS84 coordinates
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
