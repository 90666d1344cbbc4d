//! App Context

use std::sync::Arc;

use showroom::vehicles::VehicleType;
use thiserror::Error;

use crate::{
    client::{ApiClient, ApiConfig, ApiError},
    domain::{
        customers::{CustomersService, HttpCustomersService},
        orders::{HttpOrdersService, OrdersService},
        vehicles::{HttpVehiclesService, VehiclesService},
    },
    screens::{CustomersScreen, OrdersScreen, VehiclesScreen},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build API client")]
    Client(#[source] ApiError),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
    pub vehicles: Arc<dyn VehiclesService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: ApiConfig) -> Result<Self, AppInitError> {
        let client = ApiClient::new(config).map_err(AppInitError::Client)?;

        Ok(Self {
            customers: Arc::new(HttpCustomersService::new(client.clone())),
            vehicles: Arc::new(HttpVehiclesService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client)),
        })
    }

    #[must_use]
    pub fn customers_screen(&self) -> CustomersScreen {
        CustomersScreen::new(Arc::clone(&self.customers))
    }

    #[must_use]
    pub fn vehicles_screen(&self, vehicle_type: VehicleType) -> VehiclesScreen {
        VehiclesScreen::new(Arc::clone(&self.vehicles), vehicle_type)
    }

    #[must_use]
    pub fn orders_screen(&self) -> OrdersScreen {
        OrdersScreen::new(
            Arc::clone(&self.orders),
            Arc::clone(&self.customers),
            Arc::clone(&self.vehicles),
        )
    }
}
