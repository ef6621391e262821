//! Agricultural Monitoring Platform - Backend
//!
//! Simulated field sensors, irrigation recommendations, weather-based moisture
//! advisories and farm dashboards served over HTTP.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use rand::{rngs::StdRng, SeedableRng};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::external::WeatherClient;
use crate::services::{
    AdvisoryService, FarmService, FieldSimulator, JsonFileStore, SimulatorService, SystemClock,
    WeatherService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub simulator: SimulatorService,
    pub farms: FarmService,
    pub weather: WeatherService,
    pub advisory: AdvisoryService,
}

impl AppState {
    /// Build the production state from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        // Independent streams per consumer; a configured seed makes all of them reproducible
        let mut seeder = match config.simulator.seed {
            Some(seed) => {
                tracing::info!(seed, "Using fixed simulator seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let mut next_rng = || StdRng::from_rng(&mut seeder);

        let simulator = SimulatorService::new(FieldSimulator::new(next_rng()?));
        let weather = WeatherService::new(next_rng()?);
        let farms = FarmService::new(
            Arc::new(JsonFileStore::new(&config.storage.data_path)),
            weather.clone(),
            Arc::new(SystemClock),
            next_rng()?,
        );

        let advisory = if config.weather.api_key.is_empty() {
            tracing::warn!("Weather API key not configured; live advisories will report fetch errors");
            AdvisoryService::offline()
        } else {
            AdvisoryService::with_client(WeatherClient::new(
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
                Duration::from_secs(config.weather.timeout_seconds),
            )?)
        };

        Ok(Self {
            config: Arc::new(config),
            simulator,
            farms,
            weather,
            advisory,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Agricultural Monitoring Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
