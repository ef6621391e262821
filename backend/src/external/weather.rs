//! Weather API client for fetching current conditions
//!
//! Integrates with WeatherAPI.com (`/current.json`) for the humidity and
//! rainfall the moisture advisory is computed from.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current weather conditions for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub location_name: String,
    pub region: String,
    pub country: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub precipitation_mm: f64,
    pub condition: String,
}

/// WeatherAPI.com current weather response
#[derive(Debug, Deserialize)]
struct WApiCurrentResponse {
    location: WApiLocation,
    current: WApiCurrent,
}

#[derive(Debug, Deserialize)]
struct WApiLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct WApiCurrent {
    temp_c: f64,
    humidity: f64,
    precip_mm: f64,
    condition: Option<WApiCondition>,
}

#[derive(Debug, Deserialize)]
struct WApiCondition {
    text: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions for a city or place name
    pub async fn get_current(&self, location: &str) -> AppResult<CurrentConditions> {
        let url = format!("{}/current.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to read weather response: {}", e)))?;

        parse_current_response(&body)
    }
}

/// Convert a WeatherAPI.com current weather body to our format
pub fn parse_current_response(body: &str) -> AppResult<CurrentConditions> {
    let data: WApiCurrentResponse = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalService(format!("Failed to parse weather response: {}", e))
    })?;

    Ok(CurrentConditions {
        location_name: data.location.name,
        region: data.location.region,
        country: data.location.country,
        temperature_celsius: data.current.temp_c,
        humidity_percent: data.current.humidity,
        precipitation_mm: data.current.precip_mm,
        condition: data.current.condition.map(|c| c.text).unwrap_or_default(),
    })
}
