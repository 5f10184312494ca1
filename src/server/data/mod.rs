//! Database repository layer for all document collections.
//!
//! This module contains repository structs that handle store operations (CRUD) for
//! each collection. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. Identifiers are assigned
//! here, at insert time, so callers never supply them.

pub mod composer;
pub mod customer;
pub mod nested;
pub mod person;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;

/// Generates the identifier for a newly inserted document.
pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
