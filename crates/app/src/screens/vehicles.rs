//! Vehicles screen
//!
//! One screen per vehicle type; cars, trucks and motorcycles are listed and
//! edited separately.

use std::sync::Arc;

use showroom::{
    forms::VehicleForm,
    modal::ModalState,
    notices::{Action, Entity, Notice},
    table::DataTable,
    vehicles::{Vehicle, VehicleType},
};

use crate::{
    domain::vehicles::{VehiclesService, VehiclesServiceError},
    screens::{FormDialog, ScreenError, refresh_after, refresh_cache, submit},
};

pub struct VehiclesScreen {
    vehicle_type: VehicleType,
    service: Arc<dyn VehiclesService>,
    table: DataTable<Vehicle>,
    modal: ModalState,
}

impl VehiclesScreen {
    #[must_use]
    pub fn new(service: Arc<dyn VehiclesService>, vehicle_type: VehicleType) -> Self {
        Self {
            vehicle_type,
            service,
            table: DataTable::new(),
            modal: ModalState::default(),
        }
    }

    #[must_use]
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    #[must_use]
    pub fn table(&self) -> &DataTable<Vehicle> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<Vehicle> {
        &mut self.table
    }

    /// Refetch and replace the cached vehicles of this screen's type.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cache is then marked stale.
    pub async fn refresh(&mut self) -> Result<(), VehiclesServiceError> {
        let fetched = self.service.list_vehicles(self.vehicle_type).await;

        refresh_cache(self.table.cache_mut(), fetched)
    }

    /// Validate and submit the create form.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid, belongs to another vehicle
    /// type, or the dialog is not open.
    pub async fn create(&mut self, form: &VehicleForm) -> Result<Notice, ScreenError> {
        self.check_type(form)?;

        let vehicle = form.validate()?;

        let notice = submit(
            &mut self.modal,
            Entity::Vehicle(self.vehicle_type),
            Action::Create,
            self.service.create_vehicle(vehicle),
        )
        .await?;

        refresh_after(&notice, self.refresh()).await;

        Ok(notice)
    }

    /// Validate and submit the update form for `existing`.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid, belongs to another vehicle
    /// type, or the dialog is not open.
    pub async fn update(
        &mut self,
        existing: &Vehicle,
        form: &VehicleForm,
    ) -> Result<Notice, ScreenError> {
        self.check_type(form)?;

        let vehicle = form.validate()?.with_id(existing.id());

        let notice = submit(
            &mut self.modal,
            Entity::Vehicle(self.vehicle_type),
            Action::Update,
            self.service.update_vehicle(vehicle),
        )
        .await?;

        refresh_after(&notice, self.refresh()).await;

        Ok(notice)
    }

    /// Delete `vehicle` after the user confirmed it.
    pub async fn delete(&mut self, vehicle: &Vehicle) -> Notice {
        let entity = Entity::Vehicle(vehicle.vehicle_type());

        let notice = match self.service.delete_vehicle(vehicle.selection()).await {
            Ok(()) => Notice::success(entity, Action::Delete),
            Err(VehiclesServiceError::Referenced(_)) => Notice::referenced(entity),
            Err(error) => {
                tracing::warn!(error = %error, vehicle = %vehicle.selection(), "delete failed");

                Notice::failure(entity, Action::Delete)
            }
        };

        refresh_after(&notice, self.refresh()).await;

        notice
    }

    fn check_type(&self, form: &VehicleForm) -> Result<(), ScreenError> {
        if form.vehicle_type == self.vehicle_type {
            return Ok(());
        }

        Err(ScreenError::WrongVehicleType {
            expected: self.vehicle_type,
            found: form.vehicle_type,
        })
    }
}

impl FormDialog for VehiclesScreen {
    fn modal(&self) -> &ModalState {
        &self.modal
    }

    fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }
}
