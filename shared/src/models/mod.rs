//! Domain models for the Agricultural Monitoring Platform

mod advisory;
mod alert;
mod farm;
mod field;
mod recommendation;
mod schedule;
mod weather;

pub use advisory::*;
pub use alert::*;
pub use farm::*;
pub use field::*;
pub use recommendation::*;
pub use schedule::*;
pub use weather::*;
