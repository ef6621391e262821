//! HTTP handlers for synthetic weather

use axum::{extract::State, Json};
use shared::models::SimulatedWeather;

use crate::error::AppResult;
use crate::AppState;

/// Get synthetic current weather
pub async fn get_simulated_weather(
    State(state): State<AppState>,
) -> AppResult<Json<SimulatedWeather>> {
    Ok(Json(state.weather.current()?))
}
