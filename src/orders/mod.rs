//! Orders
//!
//! The backend embeds the ordered vehicle in one of three optional fields next
//! to a `vehicle_type` discriminant. [`Order`] only exists once that shape has
//! been checked, so code past deserialization always sees exactly one vehicle
//! of the declared type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    customers::{Customer, CustomerId},
    ids::TypedId,
    vehicles::{Car, Motorcycle, Truck, Vehicle, VehicleSelection, VehicleType},
};

/// REST paths for orders.
pub mod endpoints;
/// Moving an order onto another vehicle.
pub mod reassignment;

pub use reassignment::{Method, PlannedCall, ReassignmentPlan, ReassignmentRequest};

/// Order id
pub type OrderId = TypedId<Order>;

/// Order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord", into = "OrderRecord")]
pub struct Order {
    /// Backend id.
    pub id: OrderId,
    /// Customer who placed the order.
    pub customer: Customer,
    /// Vehicle sold.
    pub vehicle: Vehicle,

    /// Total vehicle price in whole rupiah.
    pub vehicle_price: u64,
}

impl Order {
    /// Discriminant of the ordered vehicle.
    #[must_use]
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle.vehicle_type()
    }

    /// The customer and vehicle this order currently points at.
    #[must_use]
    pub fn submission(&self) -> OrderSubmission {
        OrderSubmission {
            customer: self.customer.id,
            vehicle: self.vehicle.selection(),
        }
    }
}

/// Order as transmitted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Backend id.
    pub id: OrderId,
    /// Customer who placed the order.
    pub customer: Customer,
    /// Type of the embedded vehicle.
    pub vehicle_type: VehicleType,
    /// Set when `vehicle_type` is `car`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<Car>,
    /// Set when `vehicle_type` is `truck`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck: Option<Truck>,
    /// Set when `vehicle_type` is `motorcycle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motorcycle: Option<Motorcycle>,
    /// Price paid in whole rupiah.
    pub vehicle_price: u64,
}

/// Errors raised when an [`OrderRecord`] breaks the one-vehicle invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderShapeError {
    /// No embedded vehicle at all.
    #[error("order {order} declares a {declared} but embeds no vehicle")]
    MissingVehicle {
        /// Offending order.
        order: OrderId,
        /// Type the record declares.
        declared: VehicleType,
    },

    /// More than one embedded vehicle.
    #[error("order {order} embeds {count} vehicles")]
    MultipleVehicles {
        /// Offending order.
        order: OrderId,
        /// Number of embedded vehicles.
        count: usize,
    },

    /// The single embedded vehicle is not of the declared type.
    #[error("order {order} declares a {declared} but embeds a {embedded}")]
    TypeMismatch {
        /// Offending order.
        order: OrderId,
        /// Type the record declares.
        declared: VehicleType,
        /// Type of the vehicle actually embedded.
        embedded: VehicleType,
    },
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderShapeError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let OrderRecord {
            id,
            customer,
            vehicle_type,
            car,
            truck,
            motorcycle,
            vehicle_price,
        } = record;

        let mut embedded: Vec<Vehicle> = Vec::with_capacity(1);

        embedded.extend(car.map(Vehicle::Car));
        embedded.extend(truck.map(Vehicle::Truck));
        embedded.extend(motorcycle.map(Vehicle::Motorcycle));

        let count = embedded.len();

        let vehicle = match embedded.pop() {
            None => {
                return Err(OrderShapeError::MissingVehicle {
                    order: id,
                    declared: vehicle_type,
                });
            }
            Some(_) if count > 1 => {
                return Err(OrderShapeError::MultipleVehicles { order: id, count });
            }
            Some(vehicle) => vehicle,
        };

        if vehicle.vehicle_type() != vehicle_type {
            return Err(OrderShapeError::TypeMismatch {
                order: id,
                declared: vehicle_type,
                embedded: vehicle.vehicle_type(),
            });
        }

        Ok(Self {
            id,
            customer,
            vehicle,
            vehicle_price,
        })
    }
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        let vehicle_type = order.vehicle_type();

        let (car, truck, motorcycle) = match order.vehicle {
            Vehicle::Car(car) => (Some(car), None, None),
            Vehicle::Truck(truck) => (None, Some(truck), None),
            Vehicle::Motorcycle(motorcycle) => (None, None, Some(motorcycle)),
        };

        Self {
            id: order.id,
            customer: order.customer,
            vehicle_type,
            car,
            truck,
            motorcycle,
            vehicle_price: order.vehicle_price,
        }
    }
}

/// Customer and vehicle submitted from the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrderPayload", into = "OrderPayload")]
pub struct OrderSubmission {
    /// Customer placing the order.
    pub customer: CustomerId,
    /// Vehicle being sold.
    pub vehicle: VehicleSelection,
}

impl OrderSubmission {
    /// Discriminant of the selected vehicle.
    #[must_use]
    pub const fn vehicle_type(&self) -> VehicleType {
        self.vehicle.vehicle_type()
    }

    /// Request body for `POST /orders` and `PUT /orders/:id`.
    #[must_use]
    pub fn payload(&self) -> OrderPayload {
        OrderPayload::from(*self)
    }
}

/// Flat request body: `{customer_id, vehicle_type, vehicle_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Customer id.
    pub customer_id: u64,
    /// Vehicle type.
    pub vehicle_type: VehicleType,
    /// Vehicle id within its type.
    pub vehicle_id: u64,
}

impl From<OrderSubmission> for OrderPayload {
    fn from(submission: OrderSubmission) -> Self {
        Self {
            customer_id: submission.customer.get(),
            vehicle_type: submission.vehicle.vehicle_type(),
            vehicle_id: submission.vehicle.id(),
        }
    }
}

impl From<OrderPayload> for OrderSubmission {
    fn from(payload: OrderPayload) -> Self {
        Self {
            customer: CustomerId::new(payload.customer_id),
            vehicle: VehicleSelection::new(payload.vehicle_type, payload.vehicle_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::vehicles::CarId;

    use super::*;

    fn customer_json() -> Value {
        json!({
            "id": 3,
            "name": "Budi",
            "address": "Jl. Merdeka 1",
            "phone": "0812",
            "id_card_number": "3201",
            "id_card_photo": "http://localhost:3000/ktp.png",
        })
    }

    fn car_json(id: u64) -> Value {
        json!({
            "id": id,
            "model": "Avanza",
            "year": 2021,
            "seats": 7,
            "manufacturer": "Toyota",
            "price": 250_000_000,
            "fuel_type": "Bensin",
            "trunk_capacity": 300,
        })
    }

    #[test]
    fn order_with_matching_vehicle_deserializes() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 7,
            "customer": customer_json(),
            "vehicle_type": "car",
            "car": car_json(9),
            "vehicle_price": 250_000_000,
        }))?;

        assert_eq!(order.id, OrderId::new(7));
        assert_eq!(order.vehicle_type(), VehicleType::Car);
        assert_eq!(
            order.submission(),
            OrderSubmission {
                customer: CustomerId::new(3),
                vehicle: VehicleSelection::Car(CarId::new(9)),
            }
        );

        Ok(())
    }

    #[test]
    fn order_with_null_variants_deserializes() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 7,
            "customer": customer_json(),
            "vehicle_type": "car",
            "car": car_json(9),
            "truck": null,
            "motorcycle": null,
            "vehicle_price": 1,
        }))?;

        assert_eq!(order.vehicle.id(), 9);

        Ok(())
    }

    #[test]
    fn order_without_vehicle_is_rejected() -> TestResult {
        let result = Order::try_from(OrderRecord {
            id: OrderId::new(1),
            customer: serde_json::from_value(customer_json())?,
            vehicle_type: VehicleType::Truck,
            car: None,
            truck: None,
            motorcycle: None,
            vehicle_price: 0,
        });

        assert_eq!(
            result,
            Err(OrderShapeError::MissingVehicle {
                order: OrderId::new(1),
                declared: VehicleType::Truck,
            })
        );

        Ok(())
    }

    #[test]
    fn order_with_mismatched_vehicle_is_rejected() {
        let result = serde_json::from_value::<Order>(json!({
            "id": 7,
            "customer": customer_json(),
            "vehicle_type": "truck",
            "car": car_json(9),
            "vehicle_price": 1,
        }));

        let error = result.err().map(|error| error.to_string());

        assert!(
            error
                .as_deref()
                .is_some_and(|message| message.contains("declares a truck but embeds a car")),
            "expected a type mismatch, got {error:?}"
        );
    }

    #[test]
    fn order_with_two_vehicles_is_rejected() {
        let result = serde_json::from_value::<Order>(json!({
            "id": 7,
            "customer": customer_json(),
            "vehicle_type": "car",
            "car": car_json(9),
            "motorcycle": {
                "id": 2,
                "model": "Vario",
                "year": 2020,
                "seats": 2,
                "manufacturer": "Honda",
                "price": 20_000_000,
                "trunk_capacity": 18,
                "fuel_capacity": 5,
            },
            "vehicle_price": 1,
        }));

        assert!(result.is_err(), "two embedded vehicles must not parse");
    }

    #[test]
    fn submission_serializes_as_flat_payload() -> TestResult {
        let submission = OrderSubmission {
            customer: CustomerId::new(3),
            vehicle: VehicleSelection::new(VehicleType::Truck, 12),
        };

        assert_eq!(
            serde_json::to_value(submission)?,
            json!({ "customer_id": 3, "vehicle_type": "truck", "vehicle_id": 12 })
        );

        Ok(())
    }
}
