//! Notices
//!
//! Localized outcome messages shown in the console's result dialog, plus the
//! confirmation prompts shown before a delete.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::{
    customers::Customer,
    orders::Order,
    vehicles::{Vehicle, VehicleType},
};

/// Record kind a notice talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entity {
    /// A customer record.
    Customer,
    /// A vehicle of the given type.
    Vehicle(VehicleType),
    /// A sales order.
    Order,
}

impl Entity {
    /// Noun used in notice texts.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Vehicle(kind) => kind.label(),
            Self::Order => "Order",
        }
    }
}

/// User action a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Adding a record.
    Create,
    /// Editing a record.
    Update,
    /// Removing a record.
    Delete,
}

impl Action {
    const fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "ditambahkan",
            Self::Update => "diupdate",
            Self::Delete => "dihapus",
        }
    }
}

/// Success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// The request succeeded.
    Success,
    /// The request failed.
    Error,
}

/// Outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Success or failure.
    pub kind: NoticeKind,
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub text: String,
}

impl Notice {
    /// `<noun> berhasil <action>`
    #[must_use]
    pub fn success(entity: Entity, action: Action) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Berhasil!",
            text: format!("{} berhasil {}", entity.noun(), action.past_tense()),
        }
    }

    /// `<noun> gagal <action>`
    #[must_use]
    pub fn failure(entity: Entity, action: Action) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Gagal!",
            text: format!("{} gagal {}", entity.noun(), action.past_tense()),
        }
    }

    /// Delete rejected because the record is still referenced by an order.
    ///
    /// Orders themselves are never referenced, so for them this is the plain
    /// delete failure.
    #[must_use]
    pub fn referenced(entity: Entity) -> Self {
        let text = match entity {
            Entity::Customer => "Customer ini telah mempunyai pesanan!".to_string(),
            Entity::Vehicle(kind) => format!("{} ini telah mempunyai data pesanan!", kind.label()),
            Entity::Order => return Self::failure(entity, Action::Delete),
        };

        Self {
            kind: NoticeKind::Error,
            title: "Gagal!",
            text,
        }
    }

    /// Whether this notice reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.title, self.text)
    }
}

/// Confirmation prompt before deleting a customer.
#[must_use]
pub fn customer_delete_prompt(customer: &Customer) -> String {
    format!("Apakah anda yakin ingin menghapus {}?", customer.name)
}

/// Confirmation prompt before deleting a vehicle.
#[must_use]
pub fn vehicle_delete_prompt(vehicle: &Vehicle) -> String {
    let noun = match vehicle.vehicle_type() {
        VehicleType::Car => "mobil",
        kind @ (VehicleType::Truck | VehicleType::Motorcycle) => kind.label(),
    };
    let spec = vehicle.spec();

    format!(
        "Apakah anda yakin ingin menghapus {noun} {} tahun {} - {}?",
        spec.model, spec.year, spec.manufacturer
    )
}

/// Confirmation prompt before deleting an order.
#[must_use]
pub fn order_delete_prompt(order: &Order) -> String {
    format!(
        "Apakah anda yakin ingin menghapus Order - {}?",
        order.customer.name
    )
}
