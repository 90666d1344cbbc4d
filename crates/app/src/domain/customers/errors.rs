//! Customers service errors.

use std::io;

use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum CustomersServiceError {
    #[error("customer still has orders")]
    Referenced(#[source] ApiError),

    #[error("no ID card photo was chosen")]
    MissingPhoto,

    #[error("failed to read ID card photo")]
    Photo(#[from] io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
