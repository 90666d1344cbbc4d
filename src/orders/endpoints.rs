//! Order endpoint paths
//!
//! Orders are created and updated through one collection but deleted through
//! a sub-resource per vehicle type.

use crate::{orders::OrderId, vehicles::VehicleType};

/// `POST /orders`, `GET /orders`
pub const ORDERS_PATH: &str = "/orders";

/// `PUT /orders/:id`
#[must_use]
pub fn order_path(order: OrderId) -> String {
    format!("{ORDERS_PATH}/{order}")
}

/// `DELETE /orders/<cars|trucks|motorcycles>/:id`
#[must_use]
pub fn scoped_order_path(vehicle_type: VehicleType, order: OrderId) -> String {
    format!("{ORDERS_PATH}/{}/{order}", vehicle_type.collection())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_paths_use_vehicle_collections() {
        let order = OrderId::new(7);

        assert_eq!(scoped_order_path(VehicleType::Car, order), "/orders/cars/7");
        assert_eq!(
            scoped_order_path(VehicleType::Truck, order),
            "/orders/trucks/7"
        );
        assert_eq!(
            scoped_order_path(VehicleType::Motorcycle, order),
            "/orders/motorcycles/7"
        );
        assert_eq!(order_path(order), "/orders/7");
    }
}
