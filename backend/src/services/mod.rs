//! Business logic services for the Agricultural Monitoring Platform

pub mod advisory;
pub mod clock;
pub mod farm;
pub mod reporting;
pub mod simulator;
pub mod store;
pub mod weather;

pub use advisory::AdvisoryService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use farm::FarmService;
pub use simulator::{FieldSimulator, SimulatorService};
pub use store::{FarmStore, JsonFileStore, MemoryStore};
pub use weather::WeatherService;
