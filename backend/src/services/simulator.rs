//! Field sensor simulator
//!
//! Owns the field catalog and one mutable reading per field. Every poll
//! perturbs the readings by a small uniform drift and clamps them back into
//! their bounds. Recommendations, schedules and alerts are derived from the
//! current readings on demand and never stored.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::models::{
    cadence_label, default_fields, recommend_for_moisture, Alert, Drift, Field, FieldIssue,
    Reading, Recommendation, ScheduleEntry, ScheduleStatus, Severity, ALERT_TIME_FORMAT,
    MAX_CADENCE_DAYS, MAX_DRIFT, MAX_LEAD_DAYS, MIN_CADENCE_DAYS, SCHEDULE_TIME_FORMAT,
};

use crate::error::{AppError, AppResult};
use crate::services::clock::{Clock, SystemClock};

/// Initial soil moisture range (percent)
const INITIAL_MOISTURE: (f64, f64) = (20.0, 60.0);
/// Initial temperature range (°C)
const INITIAL_TEMPERATURE: (f64, f64) = (15.0, 35.0);
/// Initial humidity range (percent)
const INITIAL_HUMIDITY: (f64, f64) = (30.0, 80.0);

/// In-memory field catalog with drifting sensor readings
pub struct FieldSimulator<R: Rng, C: Clock = SystemClock> {
    fields: Vec<Field>,
    readings: BTreeMap<u32, Reading>,
    rng: R,
    clock: C,
}

impl<R: Rng> FieldSimulator<R, SystemClock> {
    /// Create a simulator over the default field catalog
    pub fn new(rng: R) -> Self {
        Self::with_clock(rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> FieldSimulator<R, C> {
    pub fn with_clock(rng: R, clock: C) -> Self {
        Self::with_fields(default_fields(), rng, clock)
    }

    /// Create a simulator over a custom field catalog
    pub fn with_fields(fields: Vec<Field>, mut rng: R, clock: C) -> Self {
        let now = clock.now();
        let readings = fields
            .iter()
            .map(|field| {
                let reading = Reading {
                    moisture: rng.gen_range(INITIAL_MOISTURE.0..=INITIAL_MOISTURE.1),
                    temperature: rng.gen_range(INITIAL_TEMPERATURE.0..=INITIAL_TEMPERATURE.1),
                    humidity: rng.gen_range(INITIAL_HUMIDITY.0..=INITIAL_HUMIDITY.1),
                    last_updated: now,
                };
                (field.id, reading)
            })
            .collect();

        Self {
            fields,
            readings,
            rng,
            clock,
        }
    }

    /// All fields in catalog order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, field_id: u32) -> AppResult<&Field> {
        self.fields
            .iter()
            .find(|f| f.id == field_id)
            .ok_or_else(|| AppError::NotFound("Field".to_string()))
    }

    /// Current reading of a field, without perturbing it
    pub fn reading(&self, field_id: u32) -> Option<&Reading> {
        self.readings.get(&field_id)
    }

    /// Overwrite a field's reading, clamped to bounds. Returns false for unknown fields.
    pub fn set_reading(&mut self, field_id: u32, mut reading: Reading) -> bool {
        match self.readings.get_mut(&field_id) {
            Some(current) => {
                reading.clamp_to_bounds();
                *current = reading;
                true
            }
            None => false,
        }
    }

    /// Perturb one field's reading, or every reading when no id is given.
    ///
    /// An unknown field id yields an empty map.
    pub fn poll(&mut self, field_id: Option<u32>) -> BTreeMap<u32, Reading> {
        let now = self.clock.now();
        match field_id {
            Some(id) => {
                if !self.readings.contains_key(&id) {
                    return BTreeMap::new();
                }
                let drift = sample_drift(&mut self.rng);
                let mut polled = BTreeMap::new();
                if let Some(reading) = self.readings.get_mut(&id) {
                    reading.apply_drift(drift, now);
                    polled.insert(id, reading.clone());
                }
                polled
            }
            None => {
                for reading in self.readings.values_mut() {
                    reading.apply_drift(sample_drift(&mut self.rng), now);
                }
                self.readings.clone()
            }
        }
    }

    /// Irrigation recommendation from the field's current moisture
    pub fn recommend(&self, field_id: u32) -> AppResult<Recommendation> {
        let reading = self
            .readings
            .get(&field_id)
            .ok_or_else(|| AppError::NotFound("Field".to_string()))?;
        Ok(recommend_for_moisture(field_id, reading.moisture))
    }

    /// One illustrative schedule entry per field, regenerated on each call
    pub fn schedules(&mut self) -> AppResult<Vec<ScheduleEntry>> {
        let now = self.clock.now();
        let mut entries = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let recommendation = self.recommend(field.id)?;
            let cadence = self.rng.gen_range(MIN_CADENCE_DAYS..=MAX_CADENCE_DAYS);
            let lead_days = self.rng.gen_range(0..=MAX_LEAD_DAYS);
            let status = *ScheduleStatus::ALL
                .choose(&mut self.rng)
                .unwrap_or(&ScheduleStatus::Pending);

            entries.push(ScheduleEntry {
                field_id: field.id,
                field_name: field.name.clone(),
                schedule: cadence_label(cadence),
                next_irrigation: (now + Duration::days(lead_days))
                    .format(SCHEDULE_TIME_FORMAT)
                    .to_string(),
                status,
                recommendation: recommendation.recommendation,
            });
        }

        Ok(entries)
    }

    /// Sample an alert for a random field. `None` only when the catalog is empty.
    pub fn random_alert(&mut self) -> Option<Alert> {
        let field = self.fields.choose(&mut self.rng)?;
        let issue = *FieldIssue::ALL.choose(&mut self.rng)?;
        let severity = *Severity::ALL.choose(&mut self.rng)?;

        Some(Alert {
            message: issue.message(&field.name),
            timestamp: self.clock.now().format(ALERT_TIME_FORMAT).to_string(),
            field_id: field.id,
            field_name: field.name.clone(),
            severity,
        })
    }
}

fn sample_drift<R: Rng>(rng: &mut R) -> Drift {
    Drift {
        moisture: rng.gen_range(-MAX_DRIFT.moisture..=MAX_DRIFT.moisture),
        temperature: rng.gen_range(-MAX_DRIFT.temperature..=MAX_DRIFT.temperature),
        humidity: rng.gen_range(-MAX_DRIFT.humidity..=MAX_DRIFT.humidity),
    }
}

/// Process-wide simulator shared between request handlers
#[derive(Clone)]
pub struct SimulatorService {
    inner: Arc<Mutex<FieldSimulator<StdRng>>>,
}

impl SimulatorService {
    pub fn new(simulator: FieldSimulator<StdRng>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulator)),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, FieldSimulator<StdRng>>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("Sensor simulator lock poisoned".to_string()))
    }

    pub fn fields(&self) -> AppResult<Vec<Field>> {
        Ok(self.lock()?.fields().to_vec())
    }

    pub fn field(&self, field_id: u32) -> AppResult<Field> {
        self.lock()?.field(field_id).cloned()
    }

    pub fn poll(&self, field_id: Option<u32>) -> AppResult<BTreeMap<u32, Reading>> {
        let readings = self.lock()?.poll(field_id);
        tracing::debug!(?field_id, polled = readings.len(), "Polled sensor readings");
        Ok(readings)
    }

    pub fn recommend(&self, field_id: u32) -> AppResult<Recommendation> {
        self.lock()?.recommend(field_id)
    }

    pub fn schedules(&self) -> AppResult<Vec<ScheduleEntry>> {
        self.lock()?.schedules()
    }

    pub fn random_alert(&self) -> AppResult<Alert> {
        let alert = self
            .lock()?
            .random_alert()
            .ok_or_else(|| AppError::NotFound("Field".to_string()))?;
        tracing::info!(
            field_id = alert.field_id,
            severity = ?alert.severity,
            "Simulated alert: {}",
            alert.message
        );
        Ok(alert)
    }
}
