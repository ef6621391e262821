//! Illustrative irrigation schedule entries

use serde::{Deserialize, Serialize};

/// Shortest cadence shown, in days
pub const MIN_CADENCE_DAYS: u32 = 2;
/// Longest cadence shown, in days
pub const MAX_CADENCE_DAYS: u32 = 5;
/// Furthest the next irrigation may be pushed out, in days
pub const MAX_LEAD_DAYS: i64 = 3;

/// Display format of `next_irrigation`
pub const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Schedule status tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Active,
    Pending,
    Completed,
}

impl ScheduleStatus {
    pub const ALL: [ScheduleStatus; 3] = [
        ScheduleStatus::Active,
        ScheduleStatus::Pending,
        ScheduleStatus::Completed,
    ];
}

/// One row of the schedule view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub field_id: u32,
    pub field_name: String,
    /// e.g. "Every 3 days"
    pub schedule: String,
    pub next_irrigation: String,
    pub status: ScheduleStatus,
    pub recommendation: String,
}

pub fn cadence_label(days: u32) -> String {
    format!("Every {} days", days)
}
