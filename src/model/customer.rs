use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LineItemDto {
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Number,
    #[schema(value_type = f64)]
    pub quantity: Number,
}

/// Invoice as submitted to and returned from the invoice routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    #[schema(value_type = f64)]
    pub subtotal: Number,
    #[schema(value_type = f64)]
    pub tax: Number,
    pub date_created: String,
    pub date_shipped: String,
    #[serde(default)]
    pub line_items: Vec<LineItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<InvoiceDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}
