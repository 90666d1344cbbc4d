//! Orders screen

use std::sync::Arc;

use rustc_hash::FxHashMap;
use showroom::{
    customers::CustomerId,
    forms::OrderForm,
    modal::ModalState,
    notices::{Action, Entity, Notice},
    options::{SelectOption, customer_options, vehicle_options, vehicle_type_options},
    orders::{Order, ReassignmentRequest},
    table::DataTable,
    vehicles::{VehicleSelection, VehicleType},
};
use thiserror::Error;

use crate::{
    domain::{
        customers::{CustomersService, CustomersServiceError},
        orders::{OrdersService, OrdersServiceError, ReassignError, reassign_order},
        vehicles::{VehiclesService, VehiclesServiceError},
    },
    screens::{FormDialog, ScreenError, refresh_after, refresh_cache, submit},
};

/// Errors raised while loading the order form's select options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to load customers")]
    Customers(#[from] CustomersServiceError),

    #[error("failed to load vehicles")]
    Vehicles(#[from] VehiclesServiceError),
}

/// Choices offered by the order form.
#[derive(Debug, Clone, Default)]
pub struct OrderFormOptions {
    pub customers: Vec<SelectOption<CustomerId>>,
    pub vehicle_types: Vec<SelectOption<VehicleType>>,
    pub vehicles: FxHashMap<VehicleType, Vec<SelectOption<VehicleSelection>>>,
}

impl OrderFormOptions {
    /// Vehicles offered once `vehicle_type` is chosen.
    #[must_use]
    pub fn vehicles_of(&self, vehicle_type: VehicleType) -> &[SelectOption<VehicleSelection>] {
        self.vehicles
            .get(&vehicle_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub struct OrdersScreen {
    orders: Arc<dyn OrdersService>,
    customers: Arc<dyn CustomersService>,
    vehicles: Arc<dyn VehiclesService>,
    table: DataTable<Order>,
    modal: ModalState,
}

impl OrdersScreen {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersService>,
        customers: Arc<dyn CustomersService>,
        vehicles: Arc<dyn VehiclesService>,
    ) -> Self {
        Self {
            orders,
            customers,
            vehicles,
            table: DataTable::new(),
            modal: ModalState::default(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &DataTable<Order> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<Order> {
        &mut self.table
    }

    /// Refetch and replace the cached orders.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cache is then marked stale.
    pub async fn refresh(&mut self) -> Result<(), OrdersServiceError> {
        let fetched = self.orders.list_orders().await;

        refresh_cache(self.table.cache_mut(), fetched)
    }

    /// Load customers and every vehicle type for the order form's selects.
    ///
    /// # Errors
    ///
    /// Returns the first failing list call.
    pub async fn load_options(&self) -> Result<OrderFormOptions, OptionsError> {
        let customers = self.customers.list_customers().await?;
        let mut vehicles = FxHashMap::default();

        for vehicle_type in VehicleType::ALL {
            let listed = self.vehicles.list_vehicles(vehicle_type).await?;

            vehicles.insert(vehicle_type, vehicle_options(&listed));
        }

        Ok(OrderFormOptions {
            customers: customer_options(&customers),
            vehicle_types: vehicle_type_options().into(),
            vehicles,
        })
    }

    /// Validate and submit the create form.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid or the dialog is not open.
    pub async fn create(&mut self, form: &OrderForm) -> Result<Notice, ScreenError> {
        let submission = form.validate()?;

        let notice = submit(
            &mut self.modal,
            Entity::Order,
            Action::Create,
            self.orders.create_order(submission),
        )
        .await?;

        refresh_after(&notice, self.refresh()).await;

        Ok(notice)
    }

    /// Validate the update form and move `existing` onto the chosen vehicle.
    ///
    /// Changing the vehicle type deletes the order and creates a new one.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid or the dialog is not open.
    pub async fn update(
        &mut self,
        existing: &Order,
        form: &OrderForm,
    ) -> Result<Notice, ScreenError> {
        let request = ReassignmentRequest::for_order(existing, form.validate()?);
        let orders = Arc::clone(&self.orders);
        let mut deleted_without_replacement = false;

        let notice = submit(&mut self.modal, Entity::Order, Action::Update, async {
            match reassign_order(orders.as_ref(), request).await {
                Err(error @ ReassignError::Create(_)) => {
                    deleted_without_replacement = true;

                    Err(error)
                }
                result => result.map(|_plan| ()),
            }
        })
        .await?;

        if deleted_without_replacement {
            // The stored order is gone, so the cached row is no longer true.
            let _stale = self.refresh().await;
        } else {
            refresh_after(&notice, self.refresh()).await;
        }

        Ok(notice)
    }

    /// Delete `order` after the user confirmed it.
    pub async fn delete(&mut self, order: &Order) -> Notice {
        let notice = match self.orders.delete_order(order.id, order.vehicle_type()).await {
            Ok(()) => Notice::success(Entity::Order, Action::Delete),
            Err(error) => {
                tracing::warn!(error = %error, order_id = %order.id, "delete failed");

                Notice::failure(Entity::Order, Action::Delete)
            }
        };

        refresh_after(&notice, self.refresh()).await;

        notice
    }
}

impl FormDialog for OrdersScreen {
    fn modal(&self) -> &ModalState {
        &self.modal
    }

    fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }
}
