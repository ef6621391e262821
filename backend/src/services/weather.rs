//! Synthetic weather and sensor history

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::models::{
    HistoricalRecord, RainPrediction, SimulatedWeather, WeatherCondition, HISTORY_DAYS,
    RAIN_PREDICTION_SLOTS,
};

use crate::error::{AppError, AppResult};

/// Generate current weather
pub fn simulate_weather<R: Rng>(rng: &mut R) -> SimulatedWeather {
    let temperature = rng.gen_range(20..=35);
    let humidity = rng.gen_range(40..=80);
    let rain_chance = rng.gen_range(0..=80);
    let rain_prediction = RAIN_PREDICTION_SLOTS
        .iter()
        .map(|(time, max_chance)| RainPrediction {
            time: time.to_string(),
            chance: rng.gen_range(0..=*max_chance),
        })
        .collect();
    let condition = *WeatherCondition::ALL
        .choose(rng)
        .unwrap_or(&WeatherCondition::Sunny);
    let wind_speed = rng.gen_range(5..=20);

    SimulatedWeather {
        temperature,
        humidity,
        rain_chance,
        rain_prediction,
        condition,
        wind_speed,
    }
}

/// Generate one record per day for the days ending at `today`, oldest first
pub fn simulate_history<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<HistoricalRecord> {
    (0..HISTORY_DAYS)
        .map(|i| {
            let date = today - Duration::days(HISTORY_DAYS - 1 - i);
            HistoricalRecord {
                date: date.format("%Y-%m-%d").to_string(),
                temperature: rng.gen_range(20.0..=35.0),
                humidity: rng.gen_range(40.0..=80.0),
                rainfall: rng.gen_range(0.0..=15.0),
                moisture: rng.gen_range(30.0..=60.0),
            }
        })
        .collect()
}

/// Synthetic weather source shared between handlers
#[derive(Clone)]
pub struct WeatherService {
    rng: Arc<Mutex<StdRng>>,
}

impl WeatherService {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    fn rng(&self) -> AppResult<MutexGuard<'_, StdRng>> {
        self.rng
            .lock()
            .map_err(|_| AppError::Internal("Weather generator lock poisoned".to_string()))
    }

    pub fn current(&self) -> AppResult<SimulatedWeather> {
        Ok(simulate_weather(&mut *self.rng()?))
    }

    pub fn history(&self, today: NaiveDate) -> AppResult<Vec<HistoricalRecord>> {
        Ok(simulate_history(&mut *self.rng()?, today))
    }
}
