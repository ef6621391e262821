//! Soil moisture estimation from weather conditions
//!
//! The estimate is a linear blend of relative humidity and rainfall, capped
//! at 100%. Only the upper bound is clamped. The language a result is
//! rendered in never changes the estimate or the decision.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Language;

/// Weight of relative humidity in the estimate
pub const HUMIDITY_WEIGHT: f64 = 0.6;
/// Weight of rainfall (mm) in the estimate
pub const RAINFALL_WEIGHT: f64 = 4.0;
/// Estimated moisture below this suggests irrigation
pub const IRRIGATION_MOISTURE_LIMIT: i32 = 50;
/// Rainfall at or above this (mm) rules irrigation out
pub const IRRIGATION_RAINFALL_LIMIT: f64 = 5.0;

/// Estimated soil moisture and irrigation decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MoistureEstimate {
    pub humidity: f64,
    pub rainfall_mm: f64,
    /// Estimated soil moisture (percent, at most 100)
    pub moisture: i32,
    pub irrigate: bool,
}

/// Weather conditions that cannot be turned into an estimate
#[derive(Debug, Error, PartialEq)]
pub enum ConditionsError {
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

/// Estimate soil moisture and decide whether to irrigate
pub fn estimate(humidity: f64, rainfall_mm: f64) -> MoistureEstimate {
    let raw = (humidity * HUMIDITY_WEIGHT + rainfall_mm * RAINFALL_WEIGHT).round();
    let moisture = raw.min(100.0) as i32;
    let irrigate = moisture < IRRIGATION_MOISTURE_LIMIT && rainfall_mm < IRRIGATION_RAINFALL_LIMIT;

    MoistureEstimate {
        humidity,
        rainfall_mm,
        moisture,
        irrigate,
    }
}

/// Estimate from untrusted upstream values
pub fn checked_estimate(humidity: f64, rainfall_mm: f64) -> Result<MoistureEstimate, ConditionsError> {
    for (name, value) in [("humidity", humidity), ("rainfall", rainfall_mm)] {
        if !value.is_finite() {
            return Err(ConditionsError::NonFinite(name));
        }
        if value < 0.0 {
            return Err(ConditionsError::Negative(name));
        }
    }
    Ok(estimate(humidity, rainfall_mm))
}

impl MoistureEstimate {
    /// Render the one-line advisory for a location
    pub fn message(&self, location: &str, language: Language) -> String {
        let location = title_case(location);
        let rainfall = format_rainfall(self.rainfall_mm);
        let decision = decision_label(self.irrigate, language);
        match language {
            Language::English => format!(
                "{} - Moisture: {}%, Rainfall: {}mm → {}",
                location, self.moisture, rainfall, decision
            ),
            Language::Tamil => format!(
                "{} - நிலத்தின் ஈரப்பதம்: {}%, மழை: {}mm → {}",
                location, self.moisture, rainfall, decision
            ),
        }
    }
}

pub fn decision_label(irrigate: bool, language: Language) -> &'static str {
    match (language, irrigate) {
        (Language::English, true) => "✅ Irrigate Now",
        (Language::English, false) => "❌ No Irrigation Needed",
        (Language::Tamil, true) => "✅ நீரூற்றி இப்போது",
        (Language::Tamil, false) => "❌ நீரூட்ட தேவையில்லை",
    }
}

/// Message shown when weather for a location could not be fetched
pub fn fetch_error_message(location: &str, language: Language) -> String {
    let location = title_case(location);
    match language {
        Language::English => format!(
            "Error fetching weather for {}. Please check the city name or try again later.",
            location
        ),
        Language::Tamil => format!(
            "{} க்கான வானிலை தகவலைப் பெறுவதில் பிழை. நகரப் பெயரைச் சரிபார்க்கவும் அல்லது பின்னர் முயற்சிக்கவும்.",
            location
        ),
    }
}

/// Capitalize the first letter of each word and lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Rainfall with at least one decimal place ("2.0", "2.5")
pub fn format_rainfall(rainfall_mm: f64) -> String {
    if rainfall_mm.fract() == 0.0 {
        format!("{:.1}", rainfall_mm)
    } else {
        format!("{}", rainfall_mm)
    }
}
