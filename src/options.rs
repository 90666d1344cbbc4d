//! Select options for the order form

use serde::Serialize;

use crate::{
    customers::{Customer, CustomerId},
    vehicles::{Vehicle, VehicleSelection, VehicleType},
};

/// One entry of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<V> {
    /// Text shown to the user.
    pub label: String,
    /// Value submitted when chosen.
    pub value: V,
}

/// Customers by name.
#[must_use]
pub fn customer_options(customers: &[Customer]) -> Vec<SelectOption<CustomerId>> {
    customers
        .iter()
        .map(|customer| SelectOption {
            label: customer.name.clone(),
            value: customer.id,
        })
        .collect()
}

/// Vehicles by model.
#[must_use]
pub fn vehicle_options(vehicles: &[Vehicle]) -> Vec<SelectOption<VehicleSelection>> {
    vehicles
        .iter()
        .map(|vehicle| SelectOption {
            label: vehicle.spec().model.clone(),
            value: vehicle.selection(),
        })
        .collect()
}

/// `Mobil`, `Truk`, `Motor`.
#[must_use]
pub fn vehicle_type_options() -> [SelectOption<VehicleType>; 3] {
    VehicleType::ALL.map(|kind| SelectOption {
        label: kind.label().to_string(),
        value: kind,
    })
}
