//! Irrigation recommendation derived from a field's soil moisture

use serde::{Deserialize, Serialize};

/// Moisture below this is critical
pub const CRITICAL_MOISTURE: f64 = 25.0;
/// Moisture below this warrants irrigation
pub const LOW_MOISTURE: f64 = 40.0;

/// Irrigation priority tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Step function over the current soil moisture
    pub fn from_moisture(moisture: f64) -> Self {
        if moisture < CRITICAL_MOISTURE {
            Urgency::High
        } else if moisture < LOW_MOISTURE {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Urgency::High => 60,
            Urgency::Medium => 30,
            Urgency::Low => 0,
        }
    }

    /// Water to apply, in liters
    pub fn water_volume(&self) -> u32 {
        match self {
            Urgency::High => 5000,
            Urgency::Medium => 3000,
            Urgency::Low => 0,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Urgency::High => "CRITICAL: Irrigation needed immediately",
            Urgency::Medium => "Irrigation recommended",
            Urgency::Low => "No irrigation needed",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::High => write!(f, "high"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::Low => write!(f, "low"),
        }
    }
}

/// Irrigation recommendation for a field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub field_id: u32,
    pub recommendation: String,
    pub duration_minutes: u32,
    pub water_volume: u32,
    pub urgency: Urgency,
}

/// Build the recommendation for a field from its current moisture
pub fn recommend_for_moisture(field_id: u32, moisture: f64) -> Recommendation {
    let urgency = Urgency::from_moisture(moisture);
    Recommendation {
        field_id,
        recommendation: urgency.advice().to_string(),
        duration_minutes: urgency.duration_minutes(),
        water_volume: urgency.water_volume(),
        urgency,
    }
}
