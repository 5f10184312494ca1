//! Customer service for business logic.
//!
//! Customers are looked up by userName for everything except creation. An unknown
//! userName on the invoice operations is a domain rejection, not a fault.

use entity::customer::Invoice;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{CreateCustomerParams, Customer},
};

const INVALID_USER_NAME: &str = "Invalid userName";

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Appends an invoice to the customer with the given userName.
    ///
    /// The customer is read, extended and written back without locking, so two
    /// concurrent appends to the same customer can lose one invoice.
    ///
    /// # Arguments
    /// - `user_name` - userName of the customer receiving the invoice
    /// - `invoice` - Invoice with its line items in submitted order
    ///
    /// # Returns
    /// - `Ok(Customer)` - Customer as persisted, with the invoice last
    /// - `Err(AppError::InvalidId)` - No customer has the given userName
    /// - `Err(AppError::DbErr)` - Database error during read or write
    pub async fn add_invoice(
        &self,
        user_name: &str,
        invoice: Invoice,
    ) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        repo.append_invoice(user_name, invoice)
            .await?
            .ok_or_else(|| AppError::InvalidId(INVALID_USER_NAME.to_string()))
    }

    /// Gets the invoices of the customer with the given userName, in append order.
    ///
    /// # Returns
    /// - `Ok(Vec<Invoice>)` - The customer's invoices, possibly empty
    /// - `Err(AppError::InvalidId)` - No customer has the given userName
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_invoices(&self, user_name: &str) -> Result<Vec<Invoice>, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| AppError::InvalidId(INVALID_USER_NAME.to_string()))?;

        Ok(customer.invoices)
    }
}
