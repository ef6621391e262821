//! Monitored fields and their simulated sensor readings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Bounds;

/// Soil moisture bounds (percent)
pub const MOISTURE_BOUNDS: Bounds = Bounds::new(10.0, 80.0);
/// Air temperature bounds (degrees Celsius)
pub const TEMPERATURE_BOUNDS: Bounds = Bounds::new(10.0, 40.0);
/// Relative humidity bounds (percent)
pub const HUMIDITY_BOUNDS: Bounds = Bounds::new(20.0, 90.0);

/// Largest per-poll change of each reading
pub const MAX_DRIFT: Drift = Drift {
    moisture: 2.0,
    temperature: 0.5,
    humidity: 1.0,
};

/// A monitored field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub id: u32,
    pub name: String,
    pub crop_type: String,
    pub size_acres: u32,
    pub location: String,
}

impl Field {
    pub fn new(id: u32, name: &str, crop_type: &str, size_acres: u32, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            crop_type: crop_type.to_string(),
            size_acres,
            location: location.to_string(),
        }
    }
}

/// The fixed field catalog the simulator starts with
pub fn default_fields() -> Vec<Field> {
    vec![
        Field::new(1, "North Field", "Corn", 10, "North Section"),
        Field::new(2, "South Field", "Wheat", 8, "South Section"),
        Field::new(3, "East Field", "Soybean", 12, "East Section"),
        Field::new(4, "West Field", "Cotton", 15, "West Section"),
    ]
}

/// Current sensor reading of a field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    /// Soil moisture (percent)
    pub moisture: f64,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (percent)
    pub humidity: f64,
    pub last_updated: DateTime<Utc>,
}

/// Per-poll change applied to a reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    /// Apply a drift, clamp every value to its bounds and stamp the update time
    pub fn apply_drift(&mut self, drift: Drift, now: DateTime<Utc>) {
        self.moisture += drift.moisture;
        self.temperature += drift.temperature;
        self.humidity += drift.humidity;
        self.clamp_to_bounds();
        self.last_updated = now;
    }

    pub fn clamp_to_bounds(&mut self) {
        self.moisture = MOISTURE_BOUNDS.clamp(self.moisture);
        self.temperature = TEMPERATURE_BOUNDS.clamp(self.temperature);
        self.humidity = HUMIDITY_BOUNDS.clamp(self.humidity);
    }

    pub fn within_bounds(&self) -> bool {
        MOISTURE_BOUNDS.contains(self.moisture)
            && TEMPERATURE_BOUNDS.contains(self.temperature)
            && HUMIDITY_BOUNDS.contains(self.humidity)
    }
}
