//! HTTP request handlers.
//!
//! One module per document type. Each handler converts the request DTO into service
//! parameters, calls the service and converts the domain result back into a DTO.
//! Every module exposes `routes()`, which registers its handlers together with their
//! OpenAPI operations.

pub mod composer;
pub mod customer;
pub mod person;
pub mod session;
pub mod team;

#[cfg(test)]
mod test;
