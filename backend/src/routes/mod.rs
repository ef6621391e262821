//! Route definitions for the Agricultural Monitoring Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Field catalog
        .nest("/fields", field_routes())
        // Simulated sensors
        .nest("/sensors", sensor_routes())
        // Irrigation recommendations and schedules
        .route(
            "/recommendations/:field_id",
            get(handlers::get_recommendation),
        )
        .route("/schedules", get(handlers::list_schedules))
        // Alerts
        .route("/alerts/simulate", get(handlers::simulate_alert))
        // Moisture advisory
        .nest("/advisory", advisory_routes())
        // Synthetic weather
        .route("/weather/simulated", get(handlers::get_simulated_weather))
        // Farm management
        .nest("/farms", farm_routes())
}

/// Field catalog routes
fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fields))
        .route("/:field_id", get(handlers::get_field))
}

/// Sensor polling routes
fn sensor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::poll_all_sensors))
        .route("/:field_id", get(handlers::poll_field_sensors))
}

/// Moisture advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::get_advisory))
        .route("/estimate", post(handlers::estimate_advisory))
}

/// Farm management routes
fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::setup_farm))
        .route("/:farm_id", get(handlers::get_farm))
        .route("/:farm_id/dashboard", get(handlers::get_dashboard))
        .route("/:farm_id/historical", get(handlers::get_historical_data))
        .route("/:farm_id/notifications", get(handlers::get_notifications))
}
