//! Customers

pub mod errors;
pub mod photos;
pub mod service;

pub use errors::CustomersServiceError;
pub use photos::{create_with_photo, update_with_photo};
pub use service::*;
