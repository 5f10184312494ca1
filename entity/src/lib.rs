//! SeaORM entities for every document collection.
//!
//! Each module maps one collection to a table. Sub-records that live inside a
//! parent document (roles, dependents, invoices, players) are stored as JSON
//! columns through `FromJsonQueryResult` newtypes, so a parent row always
//! carries its full nested arrays.

pub mod prelude;

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
