//! Orders

pub mod errors;
pub mod reassign;
pub mod service;

pub use errors::{OrdersServiceError, ReassignError};
pub use reassign::reassign_order;
pub use service::*;
