//! Customer factory for creating test customer documents.

use crate::factory::helpers::{document_id, next_id};
use entity::customer::{Invoice, Invoices};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let customer = CustomerFactory::new(&db)
///     .user_name("shopper1")
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    user_name: String,
    invoices: Vec<Invoice>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Customer"`
    /// - last_name: `"{id}"`
    /// - user_name: `"customer{id}"` where id is auto-incremented
    /// - no invoices
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Customer".to_string(),
            last_name: id.to_string(),
            user_name: format!("customer{}", id),
            invoices: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Seeds the customer with an existing invoice.
    pub fn invoice(mut self, invoice: Invoice) -> Self {
        self.invoices.push(invoice);
        self
    }

    /// Builds and inserts the customer document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::Set(document_id()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            user_name: ActiveValue::Set(self.user_name),
            invoices: ActiveValue::Set(Invoices(self.invoices)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
