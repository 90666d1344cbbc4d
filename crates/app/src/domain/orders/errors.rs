//! Orders service errors.

use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors raised while moving an order onto another vehicle.
#[derive(Debug, Error)]
pub enum ReassignError {
    /// The in-place update failed.
    #[error("failed to update order")]
    Update(#[source] OrdersServiceError),

    /// The order under its previous vehicle type could not be deleted; nothing
    /// was created.
    #[error("failed to delete order under its previous vehicle type")]
    Delete(#[source] OrdersServiceError),

    /// The previous order was deleted but the replacement was not created.
    #[error("order was deleted but its replacement could not be created")]
    Create(#[source] OrdersServiceError),
}
