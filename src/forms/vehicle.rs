//! Vehicle form

use crate::{
    format::{custom_number_format, parse_nominal},
    forms::{INVALID_FORMAT, ValidationErrors},
    vehicles::{NewCar, NewMotorcycle, NewTruck, NewVehicle, Vehicle, VehicleSpec, VehicleType},
};

/// Raw input of the car, truck and motorcycle forms.
///
/// Fields that do not belong to `vehicle_type` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleForm {
    /// Variant the form edits.
    pub vehicle_type: VehicleType,
    /// Raw model input.
    pub model: String,
    /// Raw year input.
    pub year: String,
    /// Raw seat count input.
    pub seats: String,
    /// Raw manufacturer input.
    pub manufacturer: String,
    /// Dot-grouped rupiah amount, e.g. `150.000.000`.
    pub price: String,
    /// Cars only.
    pub fuel_type: String,
    /// Cars and motorcycles.
    pub trunk_capacity: String,
    /// Trucks only.
    pub wheels: String,
    /// Trucks only.
    pub cargo_capacity: String,
    /// Motorcycles only.
    pub fuel_capacity: String,
}

impl VehicleForm {
    /// Empty form for `vehicle_type`.
    #[must_use]
    pub fn new(vehicle_type: VehicleType) -> Self {
        Self {
            vehicle_type,
            model: String::new(),
            year: String::new(),
            seats: String::new(),
            manufacturer: String::new(),
            price: String::new(),
            fuel_type: String::new(),
            trunk_capacity: String::new(),
            wheels: String::new(),
            cargo_capacity: String::new(),
            fuel_capacity: String::new(),
        }
    }

    /// Form pre-filled from a stored vehicle, as the update dialog shows it.
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        let spec = vehicle.spec();
        let mut form = Self {
            model: spec.model.clone(),
            year: spec.year.to_string(),
            seats: spec.seats.to_string(),
            manufacturer: spec.manufacturer.clone(),
            price: custom_number_format(spec.price),
            ..Self::new(vehicle.vehicle_type())
        };

        match vehicle {
            Vehicle::Car(car) => {
                form.fuel_type.clone_from(&car.fuel_type);
                form.trunk_capacity = car.trunk_capacity.to_string();
            }
            Vehicle::Truck(truck) => {
                form.wheels = truck.wheels.to_string();
                form.cargo_capacity = truck.cargo_capacity.to_string();
            }
            Vehicle::Motorcycle(motorcycle) => {
                form.trunk_capacity = motorcycle.trunk_capacity.to_string();
                form.fuel_capacity = motorcycle.fuel_capacity.to_string();
            }
        }

        form
    }

    /// Validate the form into a vehicle ready to submit.
    ///
    /// # Errors
    ///
    /// Returns every missing or malformed field.
    pub fn validate(&self) -> Result<NewVehicle, ValidationErrors> {
        let noun = match self.vehicle_type {
            VehicleType::Car => "mobil",
            VehicleType::Truck => "truk",
            VehicleType::Motorcycle => "motor",
        };
        let mut errors = ValidationErrors::default();

        let model = errors.required("model", &self.model, &format!("Model {noun} harus diisi"));
        let year = errors.required_number("year", &self.year, &format!("Tahun {noun} harus diisi"));
        let seats = errors.required_number("seats", &self.seats, "Jumlah kursi harus diisi");
        let manufacturer = errors.required(
            "manufacturer",
            &self.manufacturer,
            &format!("Merk {noun} harus diisi"),
        );
        let price = errors
            .required("price", &self.price, &format!("Harga {noun} harus diisi"))
            .and_then(|price| {
                parse_nominal(price).or_else(|| {
                    errors.push("price", INVALID_FORMAT);

                    None
                })
            });

        let spec = || -> Option<VehicleSpec> {
            Some(VehicleSpec {
                model: model?.to_string(),
                year: year?,
                seats: seats?,
                manufacturer: manufacturer?.to_string(),
                price: price?,
            })
        };

        match self.vehicle_type {
            VehicleType::Car => {
                let fuel_type = errors.required(
                    "fuel_type",
                    &self.fuel_type,
                    "Jenis bahan bakar mobil harus diisi",
                );
                let trunk_capacity = errors.required_number(
                    "trunk_capacity",
                    &self.trunk_capacity,
                    "Kapasitas bagasi mobil harus diisi",
                );

                errors.finish(|| {
                    Some(NewVehicle::Car(NewCar {
                        spec: spec()?,
                        fuel_type: fuel_type?.to_string(),
                        trunk_capacity: trunk_capacity?,
                    }))
                })
            }
            VehicleType::Truck => {
                let wheels =
                    errors.required_number("wheels", &self.wheels, "Jumlah roda truk harus diisi");
                let cargo_capacity = errors.required_number(
                    "cargo_capacity",
                    &self.cargo_capacity,
                    "Luas area kargo truk harus diisi",
                );

                errors.finish(|| {
                    Some(NewVehicle::Truck(NewTruck {
                        spec: spec()?,
                        wheels: wheels?,
                        cargo_capacity: cargo_capacity?,
                    }))
                })
            }
            VehicleType::Motorcycle => {
                let trunk_capacity = errors.required_number(
                    "trunk_capacity",
                    &self.trunk_capacity,
                    "Kapasitas bagasi motor harus diisi",
                );
                let fuel_capacity = errors.required_number(
                    "fuel_capacity",
                    &self.fuel_capacity,
                    "Kapasitas bahan bakar motor harus diisi",
                );

                errors.finish(|| {
                    Some(NewVehicle::Motorcycle(NewMotorcycle {
                        spec: spec()?,
                        trunk_capacity: trunk_capacity?,
                        fuel_capacity: fuel_capacity?,
                    }))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn filled_car() -> VehicleForm {
        VehicleForm {
            model: "Avanza".to_string(),
            year: "2021".to_string(),
            seats: "7".to_string(),
            manufacturer: "Toyota".to_string(),
            price: "250.000.000".to_string(),
            fuel_type: "Bensin".to_string(),
            trunk_capacity: "300".to_string(),
            ..VehicleForm::new(VehicleType::Car)
        }
    }

    #[test]
    fn empty_truck_form_lists_every_missing_field() {
        let errors = VehicleForm::new(VehicleType::Truck).validate().err();

        let messages: Vec<String> = errors
            .iter()
            .flat_map(ValidationErrors::iter)
            .map(|error| error.message.clone())
            .collect();

        assert_eq!(
            messages,
            [
                "Model truk harus diisi",
                "Tahun truk harus diisi",
                "Jumlah kursi harus diisi",
                "Merk truk harus diisi",
                "Harga truk harus diisi",
                "Jumlah roda truk harus diisi",
                "Luas area kargo truk harus diisi",
            ]
        );
    }

    #[test]
    fn grouped_price_is_accepted() -> TestResult {
        let vehicle = filled_car().validate()?;

        assert_eq!(vehicle.spec().price, 250_000_000);
        assert_eq!(vehicle.vehicle_type(), VehicleType::Car);

        Ok(())
    }

    #[test]
    fn malformed_price_and_year_are_invalid_format() {
        let form = VehicleForm {
            price: "25O.000".to_string(),
            year: "two thousand".to_string(),
            ..filled_car()
        };

        let errors = form.validate().err().unwrap_or_default();

        assert_eq!(errors.get("price"), Some(INVALID_FORMAT));
        assert_eq!(errors.get("year"), Some(INVALID_FORMAT));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn prefilled_form_round_trips_the_vehicle() -> TestResult {
        let vehicle = filled_car().validate()?.with_id(4);

        let form = VehicleForm::from_vehicle(&vehicle);

        assert_eq!(form.price, "250.000.000");
        assert_eq!(form.validate()?.with_id(4), vehicle);

        Ok(())
    }

    #[test]
    fn fields_of_other_variants_are_ignored() {
        let form = VehicleForm {
            wheels: "not a number".to_string(),
            ..filled_car()
        };

        assert!(form.validate().is_ok());
    }
}
