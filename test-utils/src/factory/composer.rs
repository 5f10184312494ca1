//! Composer factory for creating test composer documents.

use crate::factory::helpers::{document_id, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test composers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::composer::ComposerFactory;
///
/// let composer = ComposerFactory::new(&db)
///     .first_name("Clara")
///     .last_name("Schumann")
///     .build()
///     .await?;
/// ```
pub struct ComposerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
}

impl<'a> ComposerFactory<'a> {
    /// Creates a new ComposerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Composer"`
    /// - last_name: `"{id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Composer".to_string(),
            last_name: id.to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the composer document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::composer::Model)` - Created composer
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::composer::Model, DbErr> {
        entity::composer::ActiveModel {
            id: ActiveValue::Set(document_id()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a composer with default values.
///
/// Shorthand for `ComposerFactory::new(db).build().await`.
pub async fn create_composer(db: &DatabaseConnection) -> Result<entity::composer::Model, DbErr> {
    ComposerFactory::new(db).build().await
}
