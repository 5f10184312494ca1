//! Customer data repository for database operations.
//!
//! Customers are addressed by userName on the invoice routes. userName is not unique
//! at the storage level; when several customers share one, the first match is used.

use entity::customer::{Invoice, Invoices};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::{nested::NestedCollectionMutator, new_document_id},
    model::customer::{CreateCustomerParams, Customer},
};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new customer with an empty invoice list.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The created customer including its identifier
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            user_name: ActiveValue::Set(params.user_name),
            invoices: ActiveValue::Set(Invoices::default()),
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    /// Finds the first customer with the given userName.
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - Customer found
    /// - `Ok(None)` - No customer has that userName
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find()
            .filter(entity::customer::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Appends an invoice to the customer with the given userName.
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - Customer as persisted, with the invoice last
    /// - `Ok(None)` - No customer has that userName
    /// - `Err(DbErr)` - Database error during read or write
    pub async fn append_invoice(
        &self,
        user_name: &str,
        invoice: Invoice,
    ) -> Result<Option<Customer>, DbErr> {
        let entity = NestedCollectionMutator::new(self.db)
            .append_child::<entity::prelude::Customer, _, _>(
                entity::customer::Column::UserName,
                user_name,
                entity::customer::Column::Invoices,
                |customer| &mut customer.invoices.0,
                invoice,
            )
            .await?;

        Ok(entity.map(Customer::from_entity))
    }
}
