//! Customers

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Customer id
pub type CustomerId = TypedId<Customer>;

/// Customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend id.
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Home address.
    pub address: String,
    /// Phone number.
    pub phone: String,

    /// National id card number.
    pub id_card_number: String,

    /// URL of the uploaded id card photo.
    pub id_card_photo: String,
}

/// New Customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Full name.
    pub name: String,
    /// Home address.
    pub address: String,
    /// Phone number.
    pub phone: String,
    /// National ID card (KTP) number.
    pub id_card_number: String,
    /// URL of the uploaded ID card photo.
    pub id_card_photo: String,
}

impl NewCustomer {
    /// Attach a backend id, producing the stored form used for full updates.
    #[must_use]
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            id_card_number: self.id_card_number,
            id_card_photo: self.id_card_photo,
        }
    }
}
