//! Order form

use crate::{
    customers::CustomerId,
    forms::ValidationErrors,
    orders::{Order, OrderSubmission},
    vehicles::{CarId, MotorcycleId, TruckId, Vehicle, VehicleSelection, VehicleType},
};

/// Order form selections.
///
/// The form keeps one vehicle choice per type so switching the type back and
/// forth does not lose a selection; only the one matching `vehicle_type` is
/// submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// Selected customer.
    pub customer: Option<CustomerId>,
    /// Selected vehicle type.
    pub vehicle_type: Option<VehicleType>,
    /// Car chosen while the type is `car`.
    pub car: Option<CarId>,
    /// Truck chosen while the type is `truck`.
    pub truck: Option<TruckId>,
    /// Motorcycle chosen while the type is `motorcycle`.
    pub motorcycle: Option<MotorcycleId>,
}

impl OrderForm {
    /// Form pre-filled from a stored order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        let mut form = Self {
            customer: Some(order.customer.id),
            vehicle_type: Some(order.vehicle_type()),
            ..Self::default()
        };

        match &order.vehicle {
            Vehicle::Car(car) => form.car = Some(car.id),
            Vehicle::Truck(truck) => form.truck = Some(truck.id),
            Vehicle::Motorcycle(motorcycle) => form.motorcycle = Some(motorcycle.id),
        }

        form
    }

    /// Choose `selection`'s type and vehicle.
    pub fn select_vehicle(&mut self, selection: VehicleSelection) {
        self.vehicle_type = Some(selection.vehicle_type());

        match selection {
            VehicleSelection::Car(id) => self.car = Some(id),
            VehicleSelection::Truck(id) => self.truck = Some(id),
            VehicleSelection::Motorcycle(id) => self.motorcycle = Some(id),
        }
    }

    /// Vehicle id chosen for the selected type.
    #[must_use]
    pub fn selection(&self) -> Option<VehicleSelection> {
        match self.vehicle_type? {
            VehicleType::Car => self.car.map(VehicleSelection::Car),
            VehicleType::Truck => self.truck.map(VehicleSelection::Truck),
            VehicleType::Motorcycle => self.motorcycle.map(VehicleSelection::Motorcycle),
        }
    }

    /// Validate the form into a submission.
    ///
    /// # Errors
    ///
    /// Returns a message for a missing customer, vehicle type or vehicle.
    pub fn validate(&self) -> Result<OrderSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.customer.is_none() {
            errors.push("customer", "Customer harus diisi");
        }

        match self.vehicle_type {
            None => errors.push("vehicle_type", "Tipe kendaraan harus diisi"),
            Some(kind) if self.selection().is_none() => {
                errors.push(kind.as_str(), format!("{} harus diisi", kind.label()));
            }
            Some(_) => {}
        }

        errors.finish(|| {
            Some(OrderSubmission {
                customer: self.customer?,
                vehicle: self.selection()?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn only_the_selected_type_is_submitted() -> TestResult {
        let form = OrderForm {
            customer: Some(CustomerId::new(3)),
            vehicle_type: Some(VehicleType::Truck),
            car: Some(CarId::new(1)),
            truck: Some(TruckId::new(12)),
            motorcycle: None,
        };

        let submission = form.validate()?;

        assert_eq!(submission.vehicle, VehicleSelection::Truck(TruckId::new(12)));
        assert_eq!(submission.customer, CustomerId::new(3));

        Ok(())
    }

    #[test]
    fn selecting_a_vehicle_switches_the_type() -> TestResult {
        let mut form = OrderForm {
            customer: Some(CustomerId::new(3)),
            ..OrderForm::default()
        };

        form.select_vehicle(VehicleSelection::new(VehicleType::Car, 9));

        assert_eq!(form.vehicle_type, Some(VehicleType::Car));
        assert_eq!(form.validate()?.vehicle, VehicleSelection::Car(CarId::new(9)));

        Ok(())
    }

    #[test]
    fn empty_form_needs_customer_and_type() {
        let errors = OrderForm::default().validate().err().unwrap_or_default();

        assert_eq!(errors.get("customer"), Some("Customer harus diisi"));
        assert_eq!(errors.get("vehicle_type"), Some("Tipe kendaraan harus diisi"));
    }

    #[test]
    fn vehicle_of_the_selected_type_is_required() {
        let form = OrderForm {
            customer: Some(CustomerId::new(3)),
            vehicle_type: Some(VehicleType::Motorcycle),
            car: Some(CarId::new(1)),
            ..OrderForm::default()
        };

        let errors = form.validate().err().unwrap_or_default();

        assert_eq!(errors.get("motorcycle"), Some("Motor harus diisi"));
    }
}
