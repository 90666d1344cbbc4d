//! Vehicles

pub mod errors;
pub mod service;

pub use errors::VehiclesServiceError;
pub use service::*;
