use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: Number,
    pub quantity: Number,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub subtotal: Number,
    pub tax: Number,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Invoices(pub Vec<Invoice>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Looked up by the invoice routes; not unique at the storage level.
    #[sea_orm(indexed)]
    pub user_name: String,
    pub invoices: Invoices,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
