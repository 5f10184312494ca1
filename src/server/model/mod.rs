//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Nested sub-records (roles,
//! dependents, invoices, line items, players) reuse the entity crate's plain serde
//! types, since they have no identity or behaviour of their own.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
