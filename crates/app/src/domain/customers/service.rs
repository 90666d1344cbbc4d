//! Customers service.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use showroom::customers::{Customer, CustomerId, NewCustomer};

use crate::{client::ApiClient, domain::customers::errors::CustomersServiceError};

const CUSTOMERS_PATH: &str = "/customers";
const CUSTOMER_RESOURCE_PATH: &str = "/customers/resource";

#[derive(Debug, Deserialize)]
struct UploadedResource {
    #[serde(rename = "imageUrl")]
    image_url: String,
}

#[derive(Debug, Clone)]
pub struct HttpCustomersService {
    client: ApiClient,
}

impl HttpCustomersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomersService for HttpCustomersService {
    #[tracing::instrument(name = "customers.service.list_customers", skip(self), err)]
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomersServiceError> {
        Ok(self.client.get_data(CUSTOMERS_PATH).await?)
    }

    #[tracing::instrument(
        name = "customers.service.create_customer",
        skip(self, customer),
        fields(customer_name = %customer.name),
        err
    )]
    async fn create_customer(&self, customer: NewCustomer) -> Result<(), CustomersServiceError> {
        self.client.post_json(CUSTOMERS_PATH, &customer).await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "customers.service.update_customer",
        skip(self, customer),
        fields(customer_id = %customer.id),
        err
    )]
    async fn update_customer(&self, customer: Customer) -> Result<(), CustomersServiceError> {
        self.client
            .put_json(&format!("{CUSTOMERS_PATH}/{}", customer.id), &customer)
            .await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "customers.service.delete_customer",
        skip(self),
        fields(customer_id = %customer),
        err
    )]
    async fn delete_customer(&self, customer: CustomerId) -> Result<(), CustomersServiceError> {
        self.client
            .delete(&format!("{CUSTOMERS_PATH}/{customer}"))
            .await
            .map_err(|error| {
                if error.is_rejection() {
                    CustomersServiceError::Referenced(error)
                } else {
                    CustomersServiceError::Api(error)
                }
            })
    }

    #[tracing::instrument(
        name = "customers.service.upload_id_card_photo",
        skip(self),
        fields(photo = %photo.display()),
        err
    )]
    async fn upload_id_card_photo(&self, photo: PathBuf) -> Result<String, CustomersServiceError> {
        let bytes = tokio::fs::read(&photo).await?;
        let file_name = photo
            .file_name()
            .map_or_else(|| "photo".to_string(), |name| name.to_string_lossy().into_owned());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let uploaded: UploadedResource = self
            .client
            .post_multipart_data(CUSTOMER_RESOURCE_PATH, form)
            .await?;

        Ok(uploaded.image_url)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all customers.
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomersServiceError>;

    /// Creates a customer.
    async fn create_customer(&self, customer: NewCustomer) -> Result<(), CustomersServiceError>;

    /// Replaces a stored customer.
    async fn update_customer(&self, customer: Customer) -> Result<(), CustomersServiceError>;

    /// Deletes a customer. Customers with orders are refused with
    /// [`CustomersServiceError::Referenced`].
    async fn delete_customer(&self, customer: CustomerId) -> Result<(), CustomersServiceError>;

    /// Uploads an ID card photo and returns its URL.
    async fn upload_id_card_photo(&self, photo: PathBuf) -> Result<String, CustomersServiceError>;
}
