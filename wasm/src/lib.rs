//! WebAssembly module for the Agricultural Monitoring Platform
//!
//! Provides client-side computation for:
//! - Soil moisture estimates from humidity and rainfall
//! - Irrigation urgency tiers
//! - Farm moisture thresholds

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Estimate soil moisture (percent) from humidity and rainfall
#[wasm_bindgen]
pub fn estimate_soil_moisture(humidity: f64, rainfall_mm: f64) -> i32 {
    estimate(humidity, rainfall_mm).moisture
}

/// Whether the estimated conditions call for irrigation
#[wasm_bindgen]
pub fn should_irrigate(humidity: f64, rainfall_mm: f64) -> bool {
    estimate(humidity, rainfall_mm).irrigate
}

/// Full estimate as JSON
#[wasm_bindgen]
pub fn estimate_json(humidity: f64, rainfall_mm: f64) -> Result<String, JsValue> {
    let result = checked_estimate(humidity, rainfall_mm)
        .map_err(|e| JsValue::from_str(&format!("Invalid conditions: {}", e)))?;
    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Render the advisory line for a location in "English" or "Tamil"
#[wasm_bindgen]
pub fn advisory_message(location: &str, language: &str, humidity: f64, rainfall_mm: f64) -> String {
    let language = Language::parse(language).unwrap_or_default();
    estimate(humidity, rainfall_mm).message(location, language)
}

/// Classify irrigation urgency ("high", "medium", "low") from soil moisture
#[wasm_bindgen]
pub fn classify_urgency(moisture: f64) -> String {
    Urgency::from_moisture(moisture).to_string()
}

/// Moisture threshold for a crop
#[wasm_bindgen]
pub fn crop_moisture_threshold(crop_type: &str) -> u32 {
    moisture_threshold_for(crop_type)
}
