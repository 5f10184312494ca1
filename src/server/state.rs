//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the document store connection
//! pool and the credential handler; nothing in it is mutated after startup.

use sea_orm::DatabaseConnection;

use crate::server::service::credential::CredentialHandler;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `CredentialHandler` only carries the Argon2 parameters
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the document store.
    ///
    /// Acquired once at startup, shared across all requests and closed explicitly
    /// when the server shuts down.
    pub db: DatabaseConnection,

    /// Password hashing and verification with the configured work factor.
    pub credentials: CredentialHandler,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `credentials` - Credential handler used by registration and login
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, credentials: CredentialHandler) -> Self {
        Self { db, credentials }
    }
}
