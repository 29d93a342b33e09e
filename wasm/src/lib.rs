//! WebAssembly module for the Forage Balance Platform
//!
//! Runs the shared simulation engine in the browser so the client can
//! preview projections without a round trip to the backend. All inputs and
//! outputs cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use shared::models::{FarmRecord, SoilParameters, WeatherObservation};
use shared::simulation::formulas;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Simulate a single farm record, returning the result as JSON
#[wasm_bindgen]
pub fn simulate_record(record_json: &str, prediction_period: u32) -> Result<String, JsValue> {
    let record: FarmRecord = serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid record JSON: {}", e)))?;

    let result = shared::simulation::simulate_record(&record, prediction_period as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Simulate a batch of records grouped by `group_id`, returning one combined
/// result per group as a JSON array
#[wasm_bindgen]
pub fn simulate_records(records_json: &str, prediction_period: u32) -> Result<String, JsValue> {
    let records: Vec<FarmRecord> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;

    let results = shared::simulation::simulate_records(&records, prediction_period as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Compute the daily forage growth rate for given weather and soil
#[wasm_bindgen]
pub fn calculate_growth_rate(weather_json: &str, soil_json: &str) -> Result<f64, JsValue> {
    let weather: WeatherObservation = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    let soil: SoilParameters = serde_json::from_str(soil_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid soil JSON: {}", e)))?;

    Ok(formulas::calculate_growth_rate(&weather, &soil))
}

/// Estimate daily solar radiation via the Hargreaves-Samani formula
#[wasm_bindgen]
pub fn calculate_solar_radiation(temp_min: f64, temp_max: f64, sunrise: f64, sunset: f64) -> f64 {
    formulas::calculate_solar_radiation(temp_min, temp_max, sunrise as i64, sunset as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_record_roundtrips_json() {
        let json = r#"{
            "group_id": "farm 1",
            "date": "2024-05-01 00:00:00",
            "weather": {"temperature": 25, "humidity": 60, "precipitation": 0, "radiation": 18, "description": ""},
            "forageData": {"arableArea": 5, "grasslandArea": 10}
        }"#;
        let out = simulate_record(json, 7).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dates"].as_array().unwrap().len(), 7);
        assert_eq!(value["group_id"], "farm 1");
    }

    #[test]
    fn simulate_record_rejects_garbage() {
        assert!(simulate_record("not json", 7).is_err());
    }

    #[test]
    fn simulate_record_rejects_zero_period() {
        let json = r#"{"date": "2024-05-01"}"#;
        assert!(simulate_record(json, 0).is_err());
    }

    #[test]
    fn growth_rate_from_json_inputs() {
        let weather = r#"{"temperature": 25, "humidity": 60, "precipitation": 0, "radiation": 25, "description": ""}"#;
        let soil = r#"{"waterRetention": 0.35, "nutrientContent": "High"}"#;
        let rate = calculate_growth_rate(weather, soil).unwrap();
        assert!((rate - 1.09).abs() < 1e-12);
    }

    #[test]
    fn solar_radiation_positive_for_normal_day() {
        let r = calculate_solar_radiation(12.0, 24.0, 1_700_000_000.0, 1_700_043_200.0);
        assert!(r > 0.0);
    }
}
