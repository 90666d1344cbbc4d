//! Order reassignment executor.
//!
//! Carries out a [`ReassignmentPlan`] one call at a time. Across vehicle types
//! the create is only issued after the delete succeeded; a failed delete
//! aborts the whole reassignment without any compensating call.

use showroom::orders::{ReassignmentPlan, ReassignmentRequest};

use crate::domain::orders::{OrdersService, errors::ReassignError};

/// Move an order onto the submitted vehicle and return the executed plan.
///
/// # Errors
///
/// Returns the step that failed. After [`ReassignError::Delete`] nothing was
/// changed; after [`ReassignError::Create`] the old order is gone.
#[tracing::instrument(
    name = "orders.reassign",
    skip(orders, request),
    fields(
        order_id = %request.order,
        previous_vehicle_type = %request.previous_vehicle_type,
        vehicle = %request.submission.vehicle
    ),
    err
)]
pub async fn reassign_order(
    orders: &dyn OrdersService,
    request: ReassignmentRequest,
) -> Result<ReassignmentPlan, ReassignError> {
    let plan = ReassignmentPlan::for_request(&request);

    match plan {
        ReassignmentPlan::UpdateInPlace { order, submission } => {
            orders
                .update_order(order, submission)
                .await
                .map_err(ReassignError::Update)?;

            tracing::info!(order_id = %order, "updated order in place");
        }
        ReassignmentPlan::Recreate {
            order,
            previous_vehicle_type,
            submission,
        } => {
            orders
                .delete_order(order, previous_vehicle_type)
                .await
                .map_err(ReassignError::Delete)?;

            tracing::info!(
                order_id = %order,
                vehicle_type = %previous_vehicle_type,
                "deleted order under previous vehicle type"
            );

            orders
                .create_order(submission)
                .await
                .map_err(ReassignError::Create)?;

            tracing::info!(
                order_id = %order,
                vehicle = %submission.vehicle,
                "recreated order under new vehicle type"
            );
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use showroom::{
        customers::CustomerId,
        orders::{OrderId, OrderSubmission},
        vehicles::{CarId, TruckId, VehicleSelection, VehicleType},
    };
    use testresult::TestResult;

    use crate::{
        client::ApiError,
        domain::orders::{MockOrdersService, OrdersServiceError},
    };

    use super::*;

    fn request(previous: VehicleType, vehicle: VehicleSelection) -> ReassignmentRequest {
        ReassignmentRequest {
            order: OrderId::new(7),
            previous_vehicle_type: previous,
            submission: OrderSubmission {
                customer: CustomerId::new(3),
                vehicle,
            },
        }
    }

    fn rejected() -> OrdersServiceError {
        OrdersServiceError::Api(ApiError::UnexpectedStatus {
            status: 500,
            body: "boom".to_string(),
        })
    }

    #[tokio::test]
    async fn same_type_issues_only_an_update() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .withf(|order, submission| {
                *order == OrderId::new(7)
                    && submission.vehicle == VehicleSelection::Car(CarId::new(9))
            })
            .return_once(|_, _| Ok(()));

        orders.expect_delete_order().never();
        orders.expect_create_order().never();

        let plan = reassign_order(
            &orders,
            request(VehicleType::Car, VehicleSelection::Car(CarId::new(9))),
        )
        .await?;

        assert!(matches!(plan, ReassignmentPlan::UpdateInPlace { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn type_change_deletes_before_creating() -> TestResult {
        let mut orders = MockOrdersService::new();
        let mut sequence = Sequence::new();

        orders
            .expect_delete_order()
            .once()
            .in_sequence(&mut sequence)
            .withf(|order, vehicle_type| {
                *order == OrderId::new(7) && *vehicle_type == VehicleType::Car
            })
            .return_once(|_, _| Ok(()));

        orders
            .expect_create_order()
            .once()
            .in_sequence(&mut sequence)
            .withf(|submission| {
                submission.customer == CustomerId::new(3)
                    && submission.vehicle == VehicleSelection::Truck(TruckId::new(12))
            })
            .return_once(|_| Ok(()));

        orders.expect_update_order().never();

        let plan = reassign_order(
            &orders,
            request(VehicleType::Car, VehicleSelection::Truck(TruckId::new(12))),
        )
        .await?;

        assert!(matches!(plan, ReassignmentPlan::Recreate { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_never_creates_or_updates() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .return_once(|_, _| Err(rejected()));

        orders.expect_create_order().never();
        orders.expect_update_order().never();

        let result = reassign_order(
            &orders,
            request(VehicleType::Car, VehicleSelection::Truck(TruckId::new(12))),
        )
        .await;

        assert!(matches!(result, Err(ReassignError::Delete(_))));
    }

    #[tokio::test]
    async fn failed_create_after_delete_is_reported() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .return_once(|_, _| Ok(()));

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(rejected()));

        let result = reassign_order(
            &orders,
            request(VehicleType::Truck, VehicleSelection::Car(CarId::new(1))),
        )
        .await;

        assert!(matches!(result, Err(ReassignError::Create(_))));
    }

    #[tokio::test]
    async fn repeating_an_in_place_update_sends_the_same_body() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .times(2)
            .withf(|order, submission| {
                *order == OrderId::new(7)
                    && submission.payload().vehicle_id == 9
                    && submission.payload().vehicle_type == VehicleType::Car
            })
            .returning(|_, _| Ok(()));

        let request = request(VehicleType::Car, VehicleSelection::Car(CarId::new(9)));

        let first = reassign_order(&orders, request).await?;
        let second = reassign_order(&orders, request).await?;

        assert_eq!(first, second);

        Ok(())
    }
}
