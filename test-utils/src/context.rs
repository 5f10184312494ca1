use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test environment holding the stand-in document store.
///
/// Each context owns its own in-memory SQLite database, so tests never see each
/// other's documents. The connection is opened on first use and dropped with the
/// context.
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    ///
    /// `None` until `database()` or `with_tables()` opens it. Clones of the connection
    /// share the same database, which lets a router under test and the assertions in
    /// the test body read the same documents.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context whose database has not been opened yet.
    ///
    /// # Returns
    /// - New `TestContext` with no connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening the in-memory database on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection shared for the context's lifetime
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Runs the given CREATE TABLE statements against the context's database.
    ///
    /// Normally invoked through `TestBuilder::build()`. An empty list still opens the
    /// database, which yields a store with no collections at all.
    ///
    /// # Arguments
    /// - `stmts` - Table definitions generated from entities
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
