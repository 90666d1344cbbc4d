//! Customers screen

use std::sync::Arc;

use showroom::{
    customers::Customer,
    forms::{CustomerForm, FormMode},
    modal::ModalState,
    notices::{Action, Entity, Notice},
    table::DataTable,
};

use crate::{
    domain::customers::{
        CustomersService, CustomersServiceError, create_with_photo, update_with_photo,
    },
    screens::{FormDialog, ScreenError, refresh_after, refresh_cache, submit},
};

pub struct CustomersScreen {
    service: Arc<dyn CustomersService>,
    table: DataTable<Customer>,
    modal: ModalState,
}

impl CustomersScreen {
    #[must_use]
    pub fn new(service: Arc<dyn CustomersService>) -> Self {
        Self {
            service,
            table: DataTable::new(),
            modal: ModalState::default(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &DataTable<Customer> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<Customer> {
        &mut self.table
    }

    /// Refetch and replace the cached customers.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cache is then marked stale.
    pub async fn refresh(&mut self) -> Result<(), CustomersServiceError> {
        let fetched = self.service.list_customers().await;

        refresh_cache(self.table.cache_mut(), fetched)
    }

    /// Validate and submit the create form.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid or the dialog is not open.
    /// Request failures come back as a failure [`Notice`].
    pub async fn create(&mut self, form: &CustomerForm) -> Result<Notice, ScreenError> {
        let customer = form.validate(FormMode::Create)?;

        let notice = submit(
            &mut self.modal,
            Entity::Customer,
            Action::Create,
            create_with_photo(self.service.as_ref(), customer),
        )
        .await?;

        refresh_after(&notice, self.refresh()).await;

        Ok(notice)
    }

    /// Validate and submit the update form for `existing`.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is invalid or the dialog is not open.
    /// Request failures come back as a failure [`Notice`].
    pub async fn update(
        &mut self,
        existing: &Customer,
        form: &CustomerForm,
    ) -> Result<Notice, ScreenError> {
        let customer = form.validate(FormMode::Update)?;

        let notice = submit(
            &mut self.modal,
            Entity::Customer,
            Action::Update,
            update_with_photo(self.service.as_ref(), existing, customer),
        )
        .await?;

        refresh_after(&notice, self.refresh()).await;

        Ok(notice)
    }

    /// Delete `customer` after the user confirmed it.
    pub async fn delete(&mut self, customer: &Customer) -> Notice {
        let notice = match self.service.delete_customer(customer.id).await {
            Ok(()) => Notice::success(Entity::Customer, Action::Delete),
            Err(CustomersServiceError::Referenced(_)) => Notice::referenced(Entity::Customer),
            Err(error) => {
                tracing::warn!(error = %error, customer_id = %customer.id, "delete failed");

                Notice::failure(Entity::Customer, Action::Delete)
            }
        };

        refresh_after(&notice, self.refresh()).await;

        notice
    }
}

impl FormDialog for CustomersScreen {
    fn modal(&self) -> &ModalState {
        &self.modal
    }

    fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use showroom::customers::{CustomerId, NewCustomer};
    use testresult::TestResult;

    use crate::{client::ApiError, domain::customers::MockCustomersService};

    use super::*;

    fn customer(id: u64, name: &str) -> Customer {
        NewCustomer {
            name: name.to_string(),
            address: "Jl. Merdeka 1".to_string(),
            phone: "0812".to_string(),
            id_card_number: "3201".to_string(),
            id_card_photo: "http://localhost:3000/ktp.png".to_string(),
        }
        .with_id(CustomerId::new(id))
    }

    fn form() -> CustomerForm {
        CustomerForm {
            name: "Citra".to_string(),
            address: "Jl. Sudirman 2".to_string(),
            phone: "0813".to_string(),
            id_card_number: "3202".to_string(),
            id_card_photo: Some(PathBuf::from("ktp.jpg")),
        }
    }

    fn rejection() -> ApiError {
        ApiError::UnexpectedStatus {
            status: 400,
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn create_refetches_the_whole_list() -> TestResult {
        let mut service = MockCustomersService::new();

        service
            .expect_upload_id_card_photo()
            .once()
            .return_once(|_| Ok("http://localhost:3000/ktp.jpg".to_string()));

        service
            .expect_create_customer()
            .once()
            .withf(|customer| customer.name == "Citra")
            .return_once(|_| Ok(()));

        service
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![customer(1, "Ani"), customer(2, "Citra")]));

        let mut screen = CustomersScreen::new(Arc::new(service));

        screen.open_form()?;

        let notice = screen.create(&form()).await?;

        assert_eq!(notice.text, "Customer berhasil ditambahkan");
        assert_eq!(screen.table().cache().len(), 2);
        assert!(!screen.table().cache().is_stale());

        screen.acknowledge()?;

        assert_eq!(screen.modal(), &ModalState::Closed);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() -> TestResult {
        let mut service = MockCustomersService::new();

        service.expect_upload_id_card_photo().never();
        service.expect_create_customer().never();
        service.expect_list_customers().never();

        let mut screen = CustomersScreen::new(Arc::new(service));

        screen.open_form()?;

        let result = screen.create(&CustomerForm::default()).await;

        assert!(matches!(result, Err(ScreenError::Validation(_))));
        assert_eq!(screen.modal(), &ModalState::Open);

        Ok(())
    }

    #[tokio::test]
    async fn failed_create_keeps_rows_and_reopens_form() -> TestResult {
        let mut service = MockCustomersService::new();

        service
            .expect_upload_id_card_photo()
            .once()
            .return_once(|_| Ok("http://localhost:3000/ktp.jpg".to_string()));

        service
            .expect_create_customer()
            .once()
            .return_once(|_| Err(CustomersServiceError::Api(rejection())));

        service.expect_list_customers().never();

        let mut screen = CustomersScreen::new(Arc::new(service));

        screen.open_form()?;

        let notice = screen.create(&form()).await?;

        assert_eq!(notice.text, "Customer gagal ditambahkan");

        screen.acknowledge()?;

        assert_eq!(screen.modal(), &ModalState::Open);

        Ok(())
    }

    #[tokio::test]
    async fn referenced_customer_gets_the_friendly_notice() {
        let mut service = MockCustomersService::new();

        service
            .expect_delete_customer()
            .once()
            .withf(|id| *id == CustomerId::new(1))
            .return_once(|_| Err(CustomersServiceError::Referenced(rejection())));

        service.expect_list_customers().never();

        let mut screen = CustomersScreen::new(Arc::new(service));

        let notice = screen.delete(&customer(1, "Ani")).await;

        assert_eq!(notice.title, "Gagal!");
        assert_eq!(notice.text, "Customer ini telah mempunyai pesanan!");
    }

    #[tokio::test]
    async fn failed_refetch_marks_rows_stale() {
        let mut service = MockCustomersService::new();

        service
            .expect_delete_customer()
            .once()
            .return_once(|_| Ok(()));

        service
            .expect_list_customers()
            .once()
            .return_once(|| Err(CustomersServiceError::Api(rejection())));

        let mut screen = CustomersScreen::new(Arc::new(service));

        screen.table_mut().cache_mut().replace(vec![customer(1, "Ani")]);

        let notice = screen.delete(&customer(1, "Ani")).await;

        assert!(notice.is_success());
        assert!(screen.table().cache().is_stale());
    }
}
