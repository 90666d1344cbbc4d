//! Customer writes that carry an ID card photo.
//!
//! The photo is uploaded first and the customer is written only once the
//! upload returned a URL.

use showroom::{customers::Customer, forms::ValidCustomer};

use crate::domain::customers::{CustomersService, CustomersServiceError};

/// Upload the chosen photo, then create the customer pointing at it.
///
/// # Errors
///
/// Returns [`CustomersServiceError::MissingPhoto`] without any request when
/// no photo was chosen, or the first failing request's error.
pub async fn create_with_photo(
    service: &dyn CustomersService,
    customer: ValidCustomer,
) -> Result<(), CustomersServiceError> {
    let Some(photo) = customer.id_card_photo.clone() else {
        return Err(CustomersServiceError::MissingPhoto);
    };

    let url = service.upload_id_card_photo(photo).await?;

    tracing::debug!(photo_url = %url, "uploaded ID card photo");

    service.create_customer(customer.into_new_customer(url)).await
}

/// Update `existing`, uploading a new photo only when one was chosen.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn update_with_photo(
    service: &dyn CustomersService,
    existing: &Customer,
    customer: ValidCustomer,
) -> Result<(), CustomersServiceError> {
    let url = match customer.id_card_photo.clone() {
        Some(photo) => service.upload_id_card_photo(photo).await?,
        None => existing.id_card_photo.clone(),
    };

    let updated = customer.into_new_customer(url).with_id(existing.id);

    service.update_customer(updated).await
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use showroom::customers::CustomerId;
    use testresult::TestResult;

    use crate::{client::ApiError, domain::customers::MockCustomersService};

    use super::*;

    fn valid(photo: Option<&str>) -> ValidCustomer {
        ValidCustomer {
            name: "Budi".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            phone: "0812".to_string(),
            id_card_number: "3201".to_string(),
            id_card_photo: photo.map(PathBuf::from),
        }
    }

    fn stored() -> Customer {
        valid(None)
            .into_new_customer("http://localhost:3000/old.png".to_string())
            .with_id(CustomerId::new(5))
    }

    #[tokio::test]
    async fn create_uploads_then_creates_with_url() -> TestResult {
        let mut service = MockCustomersService::new();

        service
            .expect_upload_id_card_photo()
            .once()
            .withf(|photo| photo == &PathBuf::from("ktp.jpg"))
            .return_once(|_| Ok("http://localhost:3000/ktp.jpg".to_string()));

        service
            .expect_create_customer()
            .once()
            .withf(|customer| customer.id_card_photo == "http://localhost:3000/ktp.jpg")
            .return_once(|_| Ok(()));

        create_with_photo(&service, valid(Some("ktp.jpg"))).await?;

        Ok(())
    }

    #[tokio::test]
    async fn failed_upload_skips_create() {
        let mut service = MockCustomersService::new();

        service
            .expect_upload_id_card_photo()
            .once()
            .return_once(|_| {
                Err(CustomersServiceError::Api(ApiError::UnexpectedStatus {
                    status: 500,
                    body: String::new(),
                }))
            });

        service.expect_create_customer().never();

        let result = create_with_photo(&service, valid(Some("ktp.jpg"))).await;

        assert!(matches!(result, Err(CustomersServiceError::Api(_))));
    }

    #[tokio::test]
    async fn create_without_photo_sends_nothing() {
        let mut service = MockCustomersService::new();

        service.expect_upload_id_card_photo().never();
        service.expect_create_customer().never();

        let result = create_with_photo(&service, valid(None)).await;

        assert!(matches!(result, Err(CustomersServiceError::MissingPhoto)));
    }

    #[tokio::test]
    async fn update_keeps_stored_photo_when_none_chosen() -> TestResult {
        let mut service = MockCustomersService::new();

        service.expect_upload_id_card_photo().never();

        service
            .expect_update_customer()
            .once()
            .withf(|customer| {
                customer.id == CustomerId::new(5)
                    && customer.id_card_photo == "http://localhost:3000/old.png"
            })
            .return_once(|_| Ok(()));

        update_with_photo(&service, &stored(), valid(None)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_photo_when_chosen() -> TestResult {
        let mut service = MockCustomersService::new();

        service
            .expect_upload_id_card_photo()
            .once()
            .return_once(|_| Ok("http://localhost:3000/new.png".to_string()));

        service
            .expect_update_customer()
            .once()
            .withf(|customer| customer.id_card_photo == "http://localhost:3000/new.png")
            .return_once(|_| Ok(()));

        update_with_photo(&service, &stored(), valid(Some("new.png"))).await?;

        Ok(())
    }
}
