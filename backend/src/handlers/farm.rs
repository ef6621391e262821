//! HTTP handlers for farm management endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::models::{Farm, FarmSetupInput, Notification};

use crate::error::AppResult;
use crate::services::farm::{Dashboard, FarmSetupResponse};
use crate::services::reporting::export_to_csv;
use crate::AppState;

/// Register a farm
pub async fn setup_farm(
    State(state): State<AppState>,
    Json(input): Json<FarmSetupInput>,
) -> AppResult<Json<FarmSetupResponse>> {
    Ok(Json(state.farms.setup_farm(input)?))
}

/// Get a farm by ID
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<u32>,
) -> AppResult<Json<Farm>> {
    Ok(Json(state.farms.get_farm(farm_id)?))
}

/// Get the farm dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(farm_id): Path<u32>,
) -> AppResult<Json<Dashboard>> {
    Ok(Json(state.farms.dashboard(farm_id)?))
}

#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// Get historical data for a farm
pub async fn get_historical_data(
    State(state): State<AppState>,
    Path(farm_id): Path<u32>,
    Query(query): Query<HistoricalQuery>,
) -> AppResult<impl IntoResponse> {
    let data = state.farms.historical(farm_id)?;

    if query.format.as_deref() == Some("csv") {
        let csv = export_to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"historical_data.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// Get notifications for a farm
pub async fn get_notifications(
    State(state): State<AppState>,
    Path(farm_id): Path<u32>,
) -> AppResult<Json<Vec<Notification>>> {
    Ok(Json(state.farms.notifications(farm_id)?))
}
