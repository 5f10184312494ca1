//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Turning missing documents into domain rejections
//! - **Orchestration**: Coordinating repository calls with the credential handler
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod composer;
pub mod credential;
pub mod customer;
pub mod person;
pub mod session;
pub mod team;
