//! Collections API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! collections API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases standing in for the document store.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Per-collection factories inserting documents with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required collections:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Team;
//!
//! #[tokio::test]
//! async fn test_team_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Team)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
