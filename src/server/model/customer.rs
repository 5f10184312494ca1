//! Customer domain model and parameters.
//!
//! Invoices, and the line items inside them, only come into existence by being
//! appended to a customer found by userName.

use entity::customer::{Invoice, LineItem};

use crate::model::customer::{CreateCustomerDto, CustomerDto, InvoiceDto, LineItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<Invoice>,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            user_name: entity.user_name,
            invoices: entity.invoices.0,
        }
    }

    /// Converts the customer domain model to a DTO for API responses.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
            invoices: self.invoices.into_iter().map(InvoiceDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl CreateCustomerParams {
    pub fn from_dto(dto: CreateCustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            user_name: dto.user_name,
        }
    }
}

impl From<Invoice> for InvoiceDto {
    fn from(invoice: Invoice) -> Self {
        Self {
            subtotal: invoice.subtotal,
            tax: invoice.tax,
            date_created: invoice.date_created,
            date_shipped: invoice.date_shipped,
            line_items: invoice
                .line_items
                .into_iter()
                .map(|item| LineItemDto {
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

impl From<InvoiceDto> for Invoice {
    fn from(dto: InvoiceDto) -> Self {
        Self {
            subtotal: dto.subtotal,
            tax: dto.tax,
            date_created: dto.date_created,
            date_shipped: dto.date_shipped,
            line_items: dto
                .line_items
                .into_iter()
                .map(|item| LineItem {
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
