//! Irrigation advisory from live weather
//!
//! Fetches humidity and rainfall for a location and turns them into a soil
//! moisture estimate. Upstream failures never fail the request: the caller
//! gets a readable fetch-error message for that location instead.

use serde::{Deserialize, Serialize};
use shared::models::{checked_estimate, estimate, fetch_error_message, MoistureEstimate};
use shared::types::Language;
use shared::validation::validate_percentage;

use crate::error::{AppError, AppResult};
use crate::external::weather::{CurrentConditions, WeatherClient};

/// Advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    weather_client: Option<WeatherClient>,
}

/// Advisory request
#[derive(Debug, Deserialize)]
pub struct AdvisoryRequest {
    pub location: String,
    #[serde(default)]
    pub language: Language,
}

/// Advisory request with caller-supplied conditions
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub location: String,
    #[serde(default)]
    pub language: Language,
    pub humidity: f64,
    pub rainfall_mm: f64,
}

/// Advisory result, rendered in the requested language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Advisory {
    pub location: String,
    pub language: Language,
    /// Absent when the weather could not be fetched
    pub estimate: Option<MoistureEstimate>,
    pub message: String,
}

impl AdvisoryService {
    /// Service without a weather client; every live lookup reports a fetch error
    pub fn offline() -> Self {
        Self {
            weather_client: None,
        }
    }

    pub fn with_client(client: WeatherClient) -> Self {
        Self {
            weather_client: Some(client),
        }
    }

    /// Look up the weather for a location and advise on irrigation
    pub async fn advise(&self, request: AdvisoryRequest) -> AppResult<Advisory> {
        let location = require_location(&request.location)?;

        let conditions = match &self.weather_client {
            Some(client) => client.get_current(location).await,
            None => Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            )),
        };

        Ok(advise_from_conditions(location, request.language, conditions))
    }

    /// Advise from caller-supplied humidity and rainfall
    pub fn advise_from_values(&self, request: EstimateRequest) -> AppResult<Advisory> {
        let location = require_location(&request.location)?;
        validate_percentage(request.humidity)
            .map_err(|e| AppError::invalid_field("humidity", e))?;
        if !request.rainfall_mm.is_finite() || request.rainfall_mm < 0.0 {
            return Err(AppError::invalid_field(
                "rainfall_mm",
                "Rainfall must be a non-negative number",
            ));
        }

        let estimate = estimate(request.humidity, request.rainfall_mm);
        Ok(Advisory {
            location: location.to_string(),
            language: request.language,
            message: estimate.message(location, request.language),
            estimate: Some(estimate),
        })
    }
}

fn require_location(location: &str) -> AppResult<&str> {
    let location = location.trim();
    if location.is_empty() {
        return Err(AppError::invalid_field("location", "Location is required"));
    }
    Ok(location)
}

/// Turn a weather lookup outcome into an advisory.
///
/// Failed lookups and malformed conditions degrade to a fetch-error message.
pub fn advise_from_conditions(
    location: &str,
    language: Language,
    conditions: AppResult<CurrentConditions>,
) -> Advisory {
    let estimate = conditions.and_then(|c| {
        checked_estimate(c.humidity_percent, c.precipitation_mm)
            .map_err(|e| AppError::ExternalService(format!("Malformed weather data: {}", e)))
    });

    match estimate {
        Ok(estimate) => {
            tracing::info!(
                location,
                moisture = estimate.moisture,
                irrigate = estimate.irrigate,
                "Computed moisture advisory"
            );
            Advisory {
                location: location.to_string(),
                language,
                message: estimate.message(location, language),
                estimate: Some(estimate),
            }
        }
        Err(e) => {
            tracing::warn!(location, "Weather unavailable for advisory: {}", e);
            Advisory {
                location: location.to_string(),
                language,
                estimate: None,
                message: fetch_error_message(location, language),
            }
        }
    }
}
