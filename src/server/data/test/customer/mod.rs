use crate::server::{data::customer::CustomerRepository, model::customer::CreateCustomerParams};
use entity::{
    customer::{Invoice, LineItem},
    prelude::Customer,
};
use sea_orm::{DbErr, EntityTrait};
use serde_json::Number;
use test_utils::{builder::TestBuilder, factory};

mod append_invoice;
mod create;
mod find_by_user_name;

fn invoice(subtotal: f64, items: &[(&str, f64, i64)]) -> Invoice {
    Invoice {
        subtotal: Number::from_f64(subtotal).unwrap(),
        tax: Number::from_f64(subtotal * 0.25).unwrap(),
        date_created: "2022-09-21".to_string(),
        date_shipped: "2022-09-23".to_string(),
        line_items: items
            .iter()
            .map(|(name, price, quantity)| LineItem {
                name: name.to_string(),
                price: Number::from_f64(*price).unwrap(),
                quantity: Number::from(*quantity),
            })
            .collect(),
    }
}
