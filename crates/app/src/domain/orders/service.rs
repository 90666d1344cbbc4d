//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use showroom::{
    orders::{
        Order, OrderId, OrderSubmission,
        endpoints::{ORDERS_PATH, order_path, scoped_order_path},
    },
    vehicles::VehicleType,
};

use crate::{client::ApiClient, domain::orders::errors::OrdersServiceError};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    #[tracing::instrument(name = "orders.service.list_orders", skip(self), err)]
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.client.get_data(ORDERS_PATH).await?)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, submission),
        fields(
            customer_id = %submission.customer,
            vehicle = %submission.vehicle
        ),
        err
    )]
    async fn create_order(&self, submission: OrderSubmission) -> Result<(), OrdersServiceError> {
        self.client
            .post_json(ORDERS_PATH, &submission.payload())
            .await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "orders.service.update_order",
        skip(self, submission),
        fields(
            order_id = %order,
            customer_id = %submission.customer,
            vehicle = %submission.vehicle
        ),
        err
    )]
    async fn update_order(
        &self,
        order: OrderId,
        submission: OrderSubmission,
    ) -> Result<(), OrdersServiceError> {
        self.client
            .put_json(&order_path(order), &submission.payload())
            .await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_id = %order, vehicle_type = %vehicle_type),
        err
    )]
    async fn delete_order(
        &self,
        order: OrderId,
        vehicle_type: VehicleType,
    ) -> Result<(), OrdersServiceError> {
        self.client
            .delete(&scoped_order_path(vehicle_type, order))
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Creates an order.
    async fn create_order(&self, submission: OrderSubmission) -> Result<(), OrdersServiceError>;

    /// Updates an order in place. Only valid while the vehicle type stays the
    /// same; see [`crate::domain::orders::reassign_order`].
    async fn update_order(
        &self,
        order: OrderId,
        submission: OrderSubmission,
    ) -> Result<(), OrdersServiceError>;

    /// Deletes an order through its vehicle type's sub-resource.
    async fn delete_order(
        &self,
        order: OrderId,
        vehicle_type: VehicleType,
    ) -> Result<(), OrdersServiceError>;
}
