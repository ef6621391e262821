//! HTTP handlers for fields and their simulated sensors

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Alert, Field, Reading, Recommendation, ScheduleEntry};

use crate::error::AppResult;
use crate::AppState;

/// List all fields
pub async fn list_fields(State(state): State<AppState>) -> AppResult<Json<Vec<Field>>> {
    Ok(Json(state.simulator.fields()?))
}

/// Get a field by ID
pub async fn get_field(
    State(state): State<AppState>,
    Path(field_id): Path<u32>,
) -> AppResult<Json<Field>> {
    Ok(Json(state.simulator.field(field_id)?))
}

/// Poll every field's sensors
pub async fn poll_all_sensors(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<u32, Reading>>> {
    Ok(Json(state.simulator.poll(None)?))
}

/// Poll one field's sensors; unknown or malformed ids yield an empty object
pub async fn poll_field_sensors(
    State(state): State<AppState>,
    Path(field_id): Path<String>,
) -> AppResult<Json<BTreeMap<u32, Reading>>> {
    match field_id.trim().parse::<u32>() {
        Ok(id) => Ok(Json(state.simulator.poll(Some(id))?)),
        Err(_) => {
            tracing::debug!(field_id, "Ignoring poll for malformed field id");
            Ok(Json(BTreeMap::new()))
        }
    }
}

/// Get the irrigation recommendation for a field
pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(field_id): Path<u32>,
) -> AppResult<Json<Recommendation>> {
    Ok(Json(state.simulator.recommend(field_id)?))
}

/// List irrigation schedules
pub async fn list_schedules(State(state): State<AppState>) -> AppResult<Json<Vec<ScheduleEntry>>> {
    Ok(Json(state.simulator.schedules()?))
}

/// Generate a random field alert
pub async fn simulate_alert(State(state): State<AppState>) -> AppResult<Json<Alert>> {
    Ok(Json(state.simulator.random_alert()?))
}
