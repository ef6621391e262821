//! Randomly sampled field alerts

use serde::{Deserialize, Serialize};

/// Display format of alert timestamps
pub const ALERT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Alert severity tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];
}

/// Issue templates an alert can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    LowMoisture,
    TemperatureAnomaly,
    IrrigationMaintenance,
    WaterPressureDrop,
}

impl FieldIssue {
    pub const ALL: [FieldIssue; 4] = [
        FieldIssue::LowMoisture,
        FieldIssue::TemperatureAnomaly,
        FieldIssue::IrrigationMaintenance,
        FieldIssue::WaterPressureDrop,
    ];

    pub fn message(&self, field_name: &str) -> String {
        match self {
            FieldIssue::LowMoisture => format!("Low moisture level detected in {}", field_name),
            FieldIssue::TemperatureAnomaly => format!("Temperature anomaly in {}", field_name),
            FieldIssue::IrrigationMaintenance => {
                format!("Irrigation system needs maintenance in {}", field_name)
            }
            FieldIssue::WaterPressureDrop => format!("Water pressure drop in {}", field_name),
        }
    }
}

/// A field alert notice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub message: String,
    pub timestamp: String,
    pub field_id: u32,
    pub field_name: String,
    pub severity: Severity,
}
