//! Wire-level DTOs shared by the request handlers and the OpenAPI document.
//!
//! Field names follow the JSON contract of the API (camelCase, `_id` for document
//! identifiers and the capitalised `Password` key), independent of the Rust names.

pub mod api;
pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
