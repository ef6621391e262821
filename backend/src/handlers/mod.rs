//! HTTP handlers

pub mod advisory;
pub mod farm;
pub mod field;
pub mod health;
pub mod weather;

pub use advisory::*;
pub use farm::*;
pub use field::*;
pub use health::*;
pub use weather::*;
