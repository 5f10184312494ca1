//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test documents with sensible
//! defaults, reducing boilerplate in tests. Collections are independent of each other,
//! so no factory needs to create dependencies first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let composer = factory::composer::create_composer(&db).await?;
//!     let team = factory::team::create_team(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let team = factory::team::TeamFactory::new(&db)
//!     .name("Otters")
//!     .player("Ada", "Lovelace", 1000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `composer` - Create composer documents
//! - `person` - Create person documents with roles and dependents
//! - `customer` - Create customer documents with invoices
//! - `team` - Create team documents with players
//! - `user` - Create registered user documents
//! - `helpers` - Shared counters and identifier generation

pub mod composer;
pub mod customer;
pub mod helpers;
pub mod person;
pub mod team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use composer::create_composer;
pub use customer::create_customer;
pub use person::create_person;
pub use team::create_team;
pub use user::create_user;
