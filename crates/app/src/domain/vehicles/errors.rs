//! Vehicles service errors.

use showroom::vehicles::VehicleSelection;
use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum VehiclesServiceError {
    #[error("{0} not found")]
    NotFound(VehicleSelection),

    #[error("vehicle already has orders")]
    Referenced(#[source] ApiError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
