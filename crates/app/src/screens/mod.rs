//! Screens
//!
//! Headless controllers for the console's listing screens. A screen owns the
//! table it shows, the modal its forms live in, and the service it talks to.
//! Every confirmed mutation refetches the whole list.

use std::{error::Error, future::Future};

use showroom::{
    forms::ValidationErrors,
    modal::{ModalError, ModalState},
    notices::{Action, Entity, Notice},
    table::RowCache,
    vehicles::VehicleType,
};
use thiserror::Error;

pub mod customers;
pub mod orders;
pub mod vehicles;

pub use customers::CustomersScreen;
pub use orders::{OrderFormOptions, OrdersScreen};
pub use vehicles::VehiclesScreen;

/// Errors that stop a form submission before any request is sent.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("invalid form: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Modal(#[from] ModalError),

    #[error("a {found} form cannot be submitted on the {expected} screen")]
    WrongVehicleType {
        expected: VehicleType,
        found: VehicleType,
    },
}

/// Dialog controls shared by every screen.
pub trait FormDialog {
    fn modal(&self) -> &ModalState;

    fn modal_mut(&mut self) -> &mut ModalState;

    /// Open the create or update dialog.
    ///
    /// # Errors
    ///
    /// Returns an error unless the dialog was closed.
    fn open_form(&mut self) -> Result<(), ModalError> {
        self.modal_mut().open()
    }

    /// Dismiss the dialog.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is in flight.
    fn close_form(&mut self) -> Result<(), ModalError> {
        self.modal_mut().close()
    }

    /// Dismiss the outcome notice.
    ///
    /// # Errors
    ///
    /// Returns an error unless an outcome is shown.
    fn acknowledge(&mut self) -> Result<(), ModalError> {
        self.modal_mut().acknowledge()
    }
}

/// Run `call` inside the modal's submitting state and leave the outcome in it.
async fn submit<E: Error>(
    modal: &mut ModalState,
    entity: Entity,
    action: Action,
    call: impl Future<Output = Result<(), E>>,
) -> Result<Notice, ModalError> {
    modal.begin_submit()?;

    let notice = match call.await {
        Ok(()) => Notice::success(entity, action),
        Err(error) => {
            tracing::warn!(error = %error, entity = entity.noun(), "submission failed");

            Notice::failure(entity, action)
        }
    };

    modal.finish(notice.clone())?;

    Ok(notice)
}

/// Await `refresh` only when `notice` reports a change on the backend.
async fn refresh_after<E>(notice: &Notice, refresh: impl Future<Output = Result<(), E>>) {
    if notice.is_success() {
        // A failed refetch only leaves the rows stale.
        let _stale = refresh.await;
    }
}

/// Replace `cache` with `fetched`, or mark it stale when the fetch failed.
fn refresh_cache<T, E: Error>(
    cache: &mut RowCache<T>,
    fetched: Result<Vec<T>, E>,
) -> Result<(), E> {
    match fetched {
        Ok(rows) => {
            cache.replace(rows);

            Ok(())
        }
        Err(error) => {
            tracing::warn!(error = %error, "refetch failed, marking rows stale");

            cache.invalidate();

            Err(error)
        }
    }
}
