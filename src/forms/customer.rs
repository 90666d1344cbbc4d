//! Customer form

use std::path::PathBuf;

use crate::{
    customers::{Customer, NewCustomer},
    forms::ValidationErrors,
};

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new customer; the photo is required.
    Create,
    /// Editing a stored customer; the photo is optional.
    Update,
}

/// Raw input of the customer form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    /// Raw name input.
    pub name: String,
    /// Raw address input.
    pub address: String,
    /// Raw phone input.
    pub phone: String,
    /// Raw ID card number input.
    pub id_card_number: String,

    /// Newly chosen ID card photo. Required when creating; when updating an
    /// empty value keeps the stored photo.
    pub id_card_photo: Option<PathBuf>,
}

/// Customer details that passed validation, plus the photo still to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCustomer {
    /// Trimmed name.
    pub name: String,
    /// Trimmed address.
    pub address: String,
    /// Trimmed phone number.
    pub phone: String,
    /// Trimmed ID card number.
    pub id_card_number: String,
    /// Photo to upload, if one was chosen.
    pub id_card_photo: Option<PathBuf>,
}

impl ValidCustomer {
    /// Customer record pointing at the uploaded `photo_url`.
    #[must_use]
    pub fn into_new_customer(self, photo_url: String) -> NewCustomer {
        NewCustomer {
            name: self.name,
            address: self.address,
            phone: self.phone,
            id_card_number: self.id_card_number,
            id_card_photo: photo_url,
        }
    }
}

impl CustomerForm {
    /// Form pre-filled from a stored customer. The photo starts empty.
    #[must_use]
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            address: customer.address.clone(),
            phone: customer.phone.clone(),
            id_card_number: customer.id_card_number.clone(),
            id_card_photo: None,
        }
    }

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every missing field. The photo only counts as missing in
    /// [`FormMode::Create`].
    pub fn validate(&self, mode: FormMode) -> Result<ValidCustomer, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.required("name", &self.name, "Nama harus diisi");
        let address = errors.required("address", &self.address, "Alamat harus diisi");
        let phone = errors.required("phone", &self.phone, "Nomor telepon harus diisi");
        let id_card_number =
            errors.required("id_card_number", &self.id_card_number, "Nomor KTP harus diisi");

        if mode == FormMode::Create && self.id_card_photo.is_none() {
            errors.push("id_card_photo", "Foto KTP harus diisi");
        }

        errors.finish(|| {
            Some(ValidCustomer {
                name: name?.to_string(),
                address: address?.to_string(),
                phone: phone?.to_string(),
                id_card_number: id_card_number?.to_string(),
                id_card_photo: self.id_card_photo.clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            name: "Budi".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            phone: "08123456789".to_string(),
            id_card_number: "3171000012".to_string(),
            id_card_photo: None,
        }
    }

    #[test]
    fn photo_is_required_on_create_only() -> TestResult {
        let errors = filled().validate(FormMode::Create).err().unwrap_or_default();

        assert_eq!(errors.get("id_card_photo"), Some("Foto KTP harus diisi"));

        let updated = filled().validate(FormMode::Update)?;

        assert_eq!(updated.id_card_photo, None);

        Ok(())
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let errors = CustomerForm::default()
            .validate(FormMode::Update)
            .err()
            .unwrap_or_default();

        assert_eq!(
            errors.to_string(),
            "name: Nama harus diisi; address: Alamat harus diisi; phone: Nomor telepon harus diisi; id_card_number: Nomor KTP harus diisi"
        );
    }

    #[test]
    fn valid_customer_takes_the_uploaded_url() -> TestResult {
        let form = CustomerForm {
            id_card_photo: Some(PathBuf::from("ktp.jpg")),
            ..filled()
        };

        let customer = form
            .validate(FormMode::Create)?
            .into_new_customer("http://localhost:3000/uploads/ktp.jpg".to_string());

        assert_eq!(customer.id_card_photo, "http://localhost:3000/uploads/ktp.jpg");
        assert_eq!(customer.name, "Budi");

        Ok(())
    }
}
