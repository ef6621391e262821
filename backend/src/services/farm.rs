//! Farm setup, dashboard and notifications

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use shared::models::{
    moisture_threshold_for, Farm, FarmRecommendation, FarmSetupInput, HistoricalRecord,
    Notification, NotificationKind, Reading, SimulatedWeather,
};
use shared::validation::validate_farm_setup;

use crate::error::{AppError, AppResult};
use crate::services::clock::Clock;
use crate::services::store::FarmStore;
use crate::services::weather::WeatherService;

/// Initial stored moisture range for a new farm (percent)
const SEED_MOISTURE: (f64, f64) = (30.0, 60.0);
/// Initial stored temperature range for a new farm (°C)
const SEED_TEMPERATURE: (f64, f64) = (20.0, 35.0);
/// Initial stored humidity range for a new farm (percent)
const SEED_HUMIDITY: (f64, f64) = (40.0, 80.0);

/// Farm service
#[derive(Clone)]
pub struct FarmService {
    store: Arc<dyn FarmStore>,
    weather: WeatherService,
    clock: Arc<dyn Clock>,
    rng: Arc<Mutex<StdRng>>,
    /// Serializes load/modify/save cycles
    write_lock: Arc<Mutex<()>>,
}

/// Farm setup result
#[derive(Debug, Serialize)]
pub struct FarmSetupResponse {
    pub message: String,
    pub farm_id: u32,
}

/// Farm dashboard
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub farm: Farm,
    pub sensor_data: Option<Reading>,
    pub weather: SimulatedWeather,
    pub recommendation: FarmRecommendation,
}

impl FarmService {
    pub fn new(
        store: Arc<dyn FarmStore>,
        weather: WeatherService,
        clock: Arc<dyn Clock>,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            weather,
            clock,
            rng: Arc::new(Mutex::new(rng)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn rng(&self) -> AppResult<MutexGuard<'_, StdRng>> {
        self.rng
            .lock()
            .map_err(|_| AppError::Internal("Farm generator lock poisoned".to_string()))
    }

    /// Register a farm and seed its stored reading
    pub fn setup_farm(&self, input: FarmSetupInput) -> AppResult<FarmSetupResponse> {
        validate_farm_setup(&input).map_err(|(field, e)| AppError::invalid_field(field, e))?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Internal("Farm store lock poisoned".to_string()))?;

        let mut db = self.store.load()?;
        let now = self.clock.now();
        let farm = Farm {
            id: db.next_farm_id(),
            farm_size: input.farm_size,
            moisture_threshold: moisture_threshold_for(&input.crop_type),
            crop_type: input.crop_type.trim().to_string(),
            irrigation_method: input.irrigation_method.trim().to_string(),
            location: input.location.trim().to_string(),
            created_at: now,
        };

        let reading = {
            let mut rng = self.rng()?;
            Reading {
                moisture: rng.gen_range(SEED_MOISTURE.0..=SEED_MOISTURE.1),
                temperature: rng.gen_range(SEED_TEMPERATURE.0..=SEED_TEMPERATURE.1),
                humidity: rng.gen_range(SEED_HUMIDITY.0..=SEED_HUMIDITY.1),
                last_updated: now,
            }
        };

        let farm_id = farm.id;
        db.sensor_data.insert(farm_id, reading);
        db.farms.push(farm);
        self.store.save(&db)?;

        tracing::info!(farm_id, "Farm setup completed");

        Ok(FarmSetupResponse {
            message: "Farm setup completed".to_string(),
            farm_id,
        })
    }

    /// Get a farm by ID
    pub fn get_farm(&self, farm_id: u32) -> AppResult<Farm> {
        self.store
            .load()?
            .farm(farm_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))
    }

    /// Stored reading, synthetic weather and threshold recommendation for a farm
    pub fn dashboard(&self, farm_id: u32) -> AppResult<Dashboard> {
        let db = self.store.load()?;
        let farm = db
            .farm(farm_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;
        let sensor_data = db.sensor_data.get(&farm_id).cloned();

        // A farm without a stored reading counts as bone dry
        let moisture = sensor_data.as_ref().map(|r| r.moisture).unwrap_or(0.0);
        let recommendation = FarmRecommendation::evaluate(moisture, farm.moisture_threshold);

        Ok(Dashboard {
            farm,
            sensor_data,
            weather: self.weather.current()?,
            recommendation,
        })
    }

    /// Ten days of synthetic history for a farm, oldest first
    pub fn historical(&self, farm_id: u32) -> AppResult<Vec<HistoricalRecord>> {
        self.get_farm(farm_id)?;
        self.weather.history(self.clock.now().date_naive())
    }

    /// Notifications for a farm
    pub fn notifications(&self, farm_id: u32) -> AppResult<Vec<Notification>> {
        let farm = self.get_farm(farm_id)?;
        let now = self.clock.now();

        Ok(vec![
            Notification {
                id: 1,
                kind: NotificationKind::RainAlert,
                message: "Rain expected tomorrow at your farm location".to_string(),
                timestamp: now - Duration::hours(2),
                read: false,
            },
            Notification {
                id: 2,
                kind: NotificationKind::MoistureAlert,
                message: format!("Soil moisture critically low in {} field", farm.crop_type),
                timestamp: now - Duration::days(1),
                read: true,
            },
        ])
    }

    /// Whether the store can currently be read
    pub fn store_status(&self) -> &'static str {
        match self.store.load() {
            Ok(_) => "available",
            Err(e) => {
                tracing::warn!("Farm store unavailable: {}", e);
                "unavailable"
            }
        }
    }
}
