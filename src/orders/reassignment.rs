//! Order reassignment
//!
//! Pointing an order at a different vehicle is an in-place update while the
//! vehicle type stays the same. Across types the order's identity lives under
//! a different sub-resource, so the old order is deleted and a new one is
//! created, strictly in that order and only after the delete succeeded.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::{SmallVec, smallvec};

use crate::{
    orders::{
        Order, OrderId, OrderPayload, OrderSubmission,
        endpoints::{ORDERS_PATH, order_path, scoped_order_path},
    },
    vehicles::VehicleType,
};

/// Prior state of an order together with the submitted replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignmentRequest {
    /// Order being edited.
    pub order: OrderId,
    /// Vehicle type stored before the edit.
    pub previous_vehicle_type: VehicleType,
    /// Submitted customer and vehicle.
    pub submission: OrderSubmission,
}

impl ReassignmentRequest {
    /// Request to move `order` onto `submission`.
    #[must_use]
    pub fn for_order(order: &Order, submission: OrderSubmission) -> Self {
        Self {
            order: order.id,
            previous_vehicle_type: order.vehicle_type(),
            submission,
        }
    }

    /// Whether the submitted vehicle type differs from the stored one.
    #[must_use]
    pub fn changes_vehicle_type(&self) -> bool {
        self.previous_vehicle_type != self.submission.vehicle_type()
    }
}

/// Remote calls needed to carry out a [`ReassignmentRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassignmentPlan {
    /// `PUT /orders/:id` with the new body.
    UpdateInPlace {
        /// Order being edited.
        order: OrderId,
        /// Submitted customer and vehicle.
        submission: OrderSubmission,
    },

    /// `DELETE /orders/<previous>/:id`, then `POST /orders` once the delete
    /// reported success.
    Recreate {
        /// Order being replaced.
        order: OrderId,
        /// Type the order is stored under.
        previous_vehicle_type: VehicleType,
        /// Submitted customer and vehicle.
        submission: OrderSubmission,
    },
}

impl ReassignmentPlan {
    /// Decide between an in-place update and delete-then-create.
    #[must_use]
    pub fn for_request(request: &ReassignmentRequest) -> Self {
        if request.changes_vehicle_type() {
            Self::Recreate {
                order: request.order,
                previous_vehicle_type: request.previous_vehicle_type,
                submission: request.submission,
            }
        } else {
            Self::UpdateInPlace {
                order: request.order,
                submission: request.submission,
            }
        }
    }

    /// The calls this plan issues, in issue order.
    #[must_use]
    pub fn calls(&self) -> SmallVec<[PlannedCall; 2]> {
        match *self {
            Self::UpdateInPlace { order, submission } => smallvec![PlannedCall {
                method: Method::Put,
                path: order_path(order),
                body: Some(submission.payload()),
            }],
            Self::Recreate {
                order,
                previous_vehicle_type,
                submission,
            } => smallvec![
                PlannedCall {
                    method: Method::Delete,
                    path: scoped_order_path(previous_vehicle_type, order),
                    body: None,
                },
                PlannedCall {
                    method: Method::Post,
                    path: ORDERS_PATH.to_string(),
                    body: Some(submission.payload()),
                },
            ],
        }
    }
}

/// HTTP method of a planned call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// One remote call of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCall {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the backend address.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<OrderPayload>,
}

impl Display for PlannedCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.method, self.path)?;

        if let Some(body) = &self.body {
            write!(
                f,
                " {{customer_id: {}, vehicle_type: {}, vehicle_id: {}}}",
                body.customer_id, body.vehicle_type, body.vehicle_id
            )?;
        }

        Ok(())
    }
}
