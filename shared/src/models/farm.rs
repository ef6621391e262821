//! Farm setup, dashboard recommendation and notification models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Reading;

/// Moisture threshold for sugarcane farms
pub const SUGARCANE_MOISTURE_THRESHOLD: u32 = 40;
/// Moisture threshold for every other crop
pub const DEFAULT_MOISTURE_THRESHOLD: u32 = 35;

/// A registered farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: u32,
    pub farm_size: f64,
    pub crop_type: String,
    pub irrigation_method: String,
    pub location: String,
    pub moisture_threshold: u32,
    pub created_at: DateTime<Utc>,
}

/// Farm setup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSetupInput {
    pub farm_size: f64,
    pub crop_type: String,
    pub irrigation_method: String,
    pub location: String,
}

/// Irrigation threshold for a crop
pub fn moisture_threshold_for(crop_type: &str) -> u32 {
    if crop_type.trim().eq_ignore_ascii_case("sugarcane") {
        SUGARCANE_MOISTURE_THRESHOLD
    } else {
        DEFAULT_MOISTURE_THRESHOLD
    }
}

/// Threshold-based recommendation shown on the farm dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmRecommendation {
    pub needs_irrigation: bool,
    pub message: String,
    pub suggestion: String,
}

impl FarmRecommendation {
    pub fn evaluate(moisture: f64, threshold: u32) -> Self {
        let needs_irrigation = moisture < f64::from(threshold);
        let (message, suggestion) = if needs_irrigation {
            (
                "Irrigation needed",
                "Consider watering in early morning to reduce evaporation",
            )
        } else {
            ("No irrigation needed", "Moisture levels are optimal")
        };

        Self {
            needs_irrigation,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Notification categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RainAlert,
    MoistureAlert,
}

/// A farm notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Everything the farm store persists
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FarmDatabase {
    #[serde(default)]
    pub farms: Vec<Farm>,
    /// Latest stored reading per farm, keyed by farm id
    #[serde(default)]
    pub sensor_data: std::collections::BTreeMap<u32, Reading>,
}

impl FarmDatabase {
    pub fn farm(&self, farm_id: u32) -> Option<&Farm> {
        self.farms.iter().find(|f| f.id == farm_id)
    }

    pub fn next_farm_id(&self) -> u32 {
        self.farms.iter().map(|f| f.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_by_crop() {
        assert_eq!(moisture_threshold_for("sugarcane"), 40);
        assert_eq!(moisture_threshold_for("Sugarcane "), 40);
        assert_eq!(moisture_threshold_for("rice"), 35);
    }

    #[test]
    fn test_farm_recommendation() {
        let rec = FarmRecommendation::evaluate(30.0, 35);
        assert!(rec.needs_irrigation);
        assert_eq!(rec.message, "Irrigation needed");

        let rec = FarmRecommendation::evaluate(35.0, 35);
        assert!(!rec.needs_irrigation);
        assert_eq!(rec.suggestion, "Moisture levels are optimal");
    }

    #[test]
    fn test_next_farm_id() {
        let mut db = FarmDatabase::default();
        assert_eq!(db.next_farm_id(), 1);
        db.farms.push(Farm {
            id: 7,
            farm_size: 2.5,
            crop_type: "rice".to_string(),
            irrigation_method: "drip".to_string(),
            location: "Trichy".to_string(),
            moisture_threshold: 35,
            created_at: Utc::now(),
        });
        assert_eq!(db.next_farm_id(), 8);
        assert!(db.farm(7).is_some());
        assert!(db.farm(1).is_none());
    }

    #[test]
    fn test_notification_kind_field_name() {
        let n = Notification {
            id: 1,
            kind: NotificationKind::RainAlert,
            message: "Rain".to_string(),
            timestamp: Utc::now(),
            read: false,
        };
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(value["type"], "rain_alert");
    }
}
