//! HTTP handlers for the moisture advisory

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::advisory::{Advisory, AdvisoryRequest, EstimateRequest};
use crate::AppState;

/// Advise on irrigation from live weather at a location
pub async fn get_advisory(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryRequest>,
) -> AppResult<Json<Advisory>> {
    let advisory = state.advisory.advise(input).await?;
    Ok(Json(advisory))
}

/// Advise on irrigation from supplied humidity and rainfall
pub async fn estimate_advisory(
    State(state): State<AppState>,
    Json(input): Json<EstimateRequest>,
) -> AppResult<Json<Advisory>> {
    Ok(Json(state.advisory.advise_from_values(input)?))
}
