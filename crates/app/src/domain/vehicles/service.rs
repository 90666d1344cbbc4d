//! Vehicles service.
//!
//! Each vehicle type lives in its own collection (`/cars`, `/trucks`,
//! `/motorcycles`) and travels over the wire as the bare variant record.

use async_trait::async_trait;
use mockall::automock;
use showroom::vehicles::{
    Car, Motorcycle, NewVehicle, Truck, Vehicle, VehicleSelection, VehicleType,
};

use crate::{client::ApiClient, domain::vehicles::errors::VehiclesServiceError};

fn collection_path(vehicle_type: VehicleType) -> String {
    format!("/{}", vehicle_type.collection())
}

fn vehicle_path(selection: VehicleSelection) -> String {
    format!(
        "/{}/{}",
        selection.vehicle_type().collection(),
        selection.id()
    )
}

#[derive(Debug, Clone)]
pub struct HttpVehiclesService {
    client: ApiClient,
}

impl HttpVehiclesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VehiclesService for HttpVehiclesService {
    #[tracing::instrument(
        name = "vehicles.service.list_vehicles",
        skip(self),
        fields(vehicle_type = %vehicle_type),
        err
    )]
    async fn list_vehicles(
        &self,
        vehicle_type: VehicleType,
    ) -> Result<Vec<Vehicle>, VehiclesServiceError> {
        let path = collection_path(vehicle_type);

        let vehicles = match vehicle_type {
            VehicleType::Car => self
                .client
                .get_data::<Vec<Car>>(&path)
                .await?
                .into_iter()
                .map(Vehicle::Car)
                .collect(),
            VehicleType::Truck => self
                .client
                .get_data::<Vec<Truck>>(&path)
                .await?
                .into_iter()
                .map(Vehicle::Truck)
                .collect(),
            VehicleType::Motorcycle => self
                .client
                .get_data::<Vec<Motorcycle>>(&path)
                .await?
                .into_iter()
                .map(Vehicle::Motorcycle)
                .collect(),
        };

        Ok(vehicles)
    }

    #[tracing::instrument(
        name = "vehicles.service.get_vehicle",
        skip(self),
        fields(vehicle = %selection),
        err
    )]
    async fn get_vehicle(
        &self,
        selection: VehicleSelection,
    ) -> Result<Vehicle, VehiclesServiceError> {
        self.list_vehicles(selection.vehicle_type())
            .await?
            .into_iter()
            .find(|vehicle| vehicle.selection() == selection)
            .ok_or(VehiclesServiceError::NotFound(selection))
    }

    #[tracing::instrument(
        name = "vehicles.service.create_vehicle",
        skip(self, vehicle),
        fields(vehicle_type = %vehicle.vehicle_type(), model = %vehicle.spec().model),
        err
    )]
    async fn create_vehicle(&self, vehicle: NewVehicle) -> Result<(), VehiclesServiceError> {
        let path = collection_path(vehicle.vehicle_type());

        match &vehicle {
            NewVehicle::Car(car) => self.client.post_json(&path, car).await?,
            NewVehicle::Truck(truck) => self.client.post_json(&path, truck).await?,
            NewVehicle::Motorcycle(motorcycle) => {
                self.client.post_json(&path, motorcycle).await?;
            }
        }

        Ok(())
    }

    #[tracing::instrument(
        name = "vehicles.service.update_vehicle",
        skip(self, vehicle),
        fields(vehicle = %vehicle.selection()),
        err
    )]
    async fn update_vehicle(&self, vehicle: Vehicle) -> Result<(), VehiclesServiceError> {
        let path = vehicle_path(vehicle.selection());

        match &vehicle {
            Vehicle::Car(car) => self.client.put_json(&path, car).await?,
            Vehicle::Truck(truck) => self.client.put_json(&path, truck).await?,
            Vehicle::Motorcycle(motorcycle) => self.client.put_json(&path, motorcycle).await?,
        }

        Ok(())
    }

    #[tracing::instrument(
        name = "vehicles.service.delete_vehicle",
        skip(self),
        fields(vehicle = %selection),
        err
    )]
    async fn delete_vehicle(
        &self,
        selection: VehicleSelection,
    ) -> Result<(), VehiclesServiceError> {
        self.client
            .delete(&vehicle_path(selection))
            .await
            .map_err(|error| {
                if error.is_rejection() {
                    VehiclesServiceError::Referenced(error)
                } else {
                    VehiclesServiceError::Api(error)
                }
            })
    }
}

#[automock]
#[async_trait]
pub trait VehiclesService: Send + Sync {
    /// Retrieves every vehicle of one type.
    async fn list_vehicles(
        &self,
        vehicle_type: VehicleType,
    ) -> Result<Vec<Vehicle>, VehiclesServiceError>;

    /// Retrieve a single vehicle.
    async fn get_vehicle(
        &self,
        selection: VehicleSelection,
    ) -> Result<Vehicle, VehiclesServiceError>;

    /// Creates a vehicle in its type's collection.
    async fn create_vehicle(&self, vehicle: NewVehicle) -> Result<(), VehiclesServiceError>;

    /// Replaces a stored vehicle.
    async fn update_vehicle(&self, vehicle: Vehicle) -> Result<(), VehiclesServiceError>;

    /// Deletes a vehicle. Vehicles with orders are refused with
    /// [`VehiclesServiceError::Referenced`].
    async fn delete_vehicle(&self, selection: VehicleSelection) -> Result<(), VehiclesServiceError>;
}

#[cfg(test)]
mod tests {
    use showroom::vehicles::{CarId, TruckId};

    use super::*;

    #[test]
    fn paths_follow_vehicle_collections() {
        assert_eq!(collection_path(VehicleType::Motorcycle), "/motorcycles");
        assert_eq!(
            vehicle_path(VehicleSelection::Truck(TruckId::new(12))),
            "/trucks/12"
        );
        assert_eq!(vehicle_path(VehicleSelection::Car(CarId::new(9))), "/cars/9");
    }
}
