//! Validation utilities for the Agricultural Monitoring Platform

use crate::models::FarmSetupInput;

// ============================================================================
// Farm Validations
// ============================================================================

/// Validate farm size (acres) is a positive, finite number
pub fn validate_farm_size(farm_size: f64) -> Result<(), &'static str> {
    if !farm_size.is_finite() || farm_size <= 0.0 {
        return Err("Farm size must be a positive number");
    }
    Ok(())
}

/// Validate a free-text value is present
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value is required");
    }
    Ok(())
}

/// Validate a farm setup request, naming the first offending field
pub fn validate_farm_setup(input: &FarmSetupInput) -> Result<(), (&'static str, &'static str)> {
    validate_farm_size(input.farm_size).map_err(|e| ("farm_size", e))?;
    validate_required(&input.crop_type).map_err(|e| ("crop_type", e))?;
    validate_required(&input.irrigation_method).map_err(|e| ("irrigation_method", e))?;
    validate_required(&input.location).map_err(|e| ("location", e))?;
    Ok(())
}

// ============================================================================
// Sensor Validations
// ============================================================================

/// Validate a percentage reading
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}
