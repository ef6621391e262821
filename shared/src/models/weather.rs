//! Synthetic weather and historical data models

use serde::{Deserialize, Serialize};

/// Sky condition reported by the synthetic weather generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Rainy,
    ];
}

/// Rain chance for a time slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainPrediction {
    pub time: String,
    /// Percent
    pub chance: u32,
}

/// Time slots of the rain prediction with the largest chance each may show
pub const RAIN_PREDICTION_SLOTS: [(&str, u32); 4] =
    [("09:00", 30), ("12:00", 50), ("15:00", 70), ("18:00", 40)];

/// Synthetic current weather
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatedWeather {
    /// °C
    pub temperature: u32,
    /// Percent
    pub humidity: u32,
    /// Percent
    pub rain_chance: u32,
    pub rain_prediction: Vec<RainPrediction>,
    pub condition: WeatherCondition,
    /// km/h
    pub wind_speed: u32,
}

/// One day of synthetic history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalRecord {
    /// `%Y-%m-%d`
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub moisture: f64,
}

/// Days of history returned per request
pub const HISTORY_DAYS: i64 = 10;
