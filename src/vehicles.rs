//! Vehicles
//!
//! Three closed variants share a common [`VehicleSpec`]. The backend exposes
//! each variant as its own collection; [`Vehicle`] joins them into one tagged
//! union so a vehicle can never carry the wrong variant payload.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Vehicle type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Passenger car
    Car,

    /// Truck
    Truck,

    /// Motorcycle
    Motorcycle,
}

impl VehicleType {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Car, Self::Truck, Self::Motorcycle];

    /// Wire name, as used in `vehicle_type` fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// REST collection segment, e.g. `cars` in `/cars/:id` and `/orders/cars/:id`.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Car => "cars",
            Self::Truck => "trucks",
            Self::Motorcycle => "motorcycles",
        }
    }

    /// Console label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Mobil",
            Self::Truck => "Truk",
            Self::Motorcycle => "Motor",
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known vehicle type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle type `{0}`")]
pub struct UnknownVehicleType(pub String);

impl FromStr for VehicleType {
    type Err = UnknownVehicleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| UnknownVehicleType(s.to_string()))
    }
}

/// Attributes shared by every vehicle variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Model name.
    pub model: String,
    /// Production year.
    pub year: u16,
    /// Seat count.
    pub seats: u8,
    /// Manufacturer name.
    pub manufacturer: String,

    /// Price in whole rupiah.
    pub price: u64,
}

/// Car id
pub type CarId = TypedId<Car>;

/// Truck id
pub type TruckId = TypedId<Truck>;

/// Motorcycle id
pub type MotorcycleId = TypedId<Motorcycle>;

/// Car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Backend id.
    pub id: CarId,
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,
    /// Fuel type, e.g. `Bensin`.
    pub fuel_type: String,

    /// Trunk capacity in litres.
    pub trunk_capacity: u32,
}

/// New Car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,
    /// Fuel type, e.g. `Bensin`.
    pub fuel_type: String,
    /// Trunk capacity in litres.
    pub trunk_capacity: u32,
}

/// Truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    /// Backend id.
    pub id: TruckId,
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,
    /// Number of wheels.
    pub wheels: u8,

    /// Cargo capacity in litres.
    pub cargo_capacity: u32,
}

/// New Truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTruck {
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,
    /// Number of wheels.
    pub wheels: u8,
    /// Cargo capacity in litres.
    pub cargo_capacity: u32,
}

/// Motorcycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motorcycle {
    /// Backend id.
    pub id: MotorcycleId,
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,

    /// Trunk capacity in litres.
    pub trunk_capacity: u32,

    /// Fuel tank capacity in litres.
    pub fuel_capacity: u32,
}

/// New Motorcycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMotorcycle {
    /// Shared attributes.
    #[serde(flatten)]
    pub spec: VehicleSpec,
    /// Trunk capacity in litres.
    pub trunk_capacity: u32,
    /// Fuel tank capacity in litres.
    pub fuel_capacity: u32,
}

/// Any vehicle, tagged by its variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Vehicle {
    /// A car.
    Car(Car),
    /// A truck.
    Truck(Truck),
    /// A motorcycle.
    Motorcycle(Motorcycle),
}

impl Vehicle {
    /// Variant discriminant.
    #[must_use]
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Self::Car(_) => VehicleType::Car,
            Self::Truck(_) => VehicleType::Truck,
            Self::Motorcycle(_) => VehicleType::Motorcycle,
        }
    }

    /// Shared attributes.
    #[must_use]
    pub fn spec(&self) -> &VehicleSpec {
        match self {
            Self::Car(car) => &car.spec,
            Self::Truck(truck) => &truck.spec,
            Self::Motorcycle(motorcycle) => &motorcycle.spec,
        }
    }

    /// Raw backend id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.selection().id()
    }

    /// Type and id of this vehicle.
    #[must_use]
    pub fn selection(&self) -> VehicleSelection {
        match self {
            Self::Car(car) => VehicleSelection::Car(car.id),
            Self::Truck(truck) => VehicleSelection::Truck(truck.id),
            Self::Motorcycle(motorcycle) => VehicleSelection::Motorcycle(motorcycle.id),
        }
    }
}

/// A vehicle that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum NewVehicle {
    /// A new car.
    Car(NewCar),
    /// A new truck.
    Truck(NewTruck),
    /// A new motorcycle.
    Motorcycle(NewMotorcycle),
}

impl NewVehicle {
    /// Variant discriminant.
    #[must_use]
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Self::Car(_) => VehicleType::Car,
            Self::Truck(_) => VehicleType::Truck,
            Self::Motorcycle(_) => VehicleType::Motorcycle,
        }
    }

    /// Shared attributes.
    #[must_use]
    pub fn spec(&self) -> &VehicleSpec {
        match self {
            Self::Car(car) => &car.spec,
            Self::Truck(truck) => &truck.spec,
            Self::Motorcycle(motorcycle) => &motorcycle.spec,
        }
    }

    /// Attach a backend id, producing the stored form used for full updates.
    #[must_use]
    pub fn with_id(self, id: u64) -> Vehicle {
        match self {
            Self::Car(car) => Vehicle::Car(Car {
                id: CarId::new(id),
                spec: car.spec,
                fuel_type: car.fuel_type,
                trunk_capacity: car.trunk_capacity,
            }),
            Self::Truck(truck) => Vehicle::Truck(Truck {
                id: TruckId::new(id),
                spec: truck.spec,
                wheels: truck.wheels,
                cargo_capacity: truck.cargo_capacity,
            }),
            Self::Motorcycle(motorcycle) => Vehicle::Motorcycle(Motorcycle {
                id: MotorcycleId::new(id),
                spec: motorcycle.spec,
                trunk_capacity: motorcycle.trunk_capacity,
                fuel_capacity: motorcycle.fuel_capacity,
            }),
        }
    }
}

/// A vehicle type joined with an id of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleSelection {
    /// A car id.
    Car(CarId),
    /// A truck id.
    Truck(TruckId),
    /// A motorcycle id.
    Motorcycle(MotorcycleId),
}

impl VehicleSelection {
    /// Build a selection from a discriminant and a raw id.
    #[must_use]
    pub const fn new(vehicle_type: VehicleType, id: u64) -> Self {
        match vehicle_type {
            VehicleType::Car => Self::Car(CarId::new(id)),
            VehicleType::Truck => Self::Truck(TruckId::new(id)),
            VehicleType::Motorcycle => Self::Motorcycle(MotorcycleId::new(id)),
        }
    }

    /// Variant discriminant.
    #[must_use]
    pub const fn vehicle_type(self) -> VehicleType {
        match self {
            Self::Car(_) => VehicleType::Car,
            Self::Truck(_) => VehicleType::Truck,
            Self::Motorcycle(_) => VehicleType::Motorcycle,
        }
    }

    /// Raw backend id.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Car(id) => id.get(),
            Self::Truck(id) => id.get(),
            Self::Motorcycle(id) => id.get(),
        }
    }
}

impl Display for VehicleSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} #{}", self.vehicle_type(), self.id())
    }
}
