//! Shared types and models for the Agricultural Monitoring Platform
//!
//! This crate contains the domain types and the pure irrigation rules shared
//! between the backend, the frontend (via WASM), and other components.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
