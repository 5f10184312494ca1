//! Composer data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

use crate::server::{
    data::new_document_id,
    model::composer::{Composer, CreateComposerParams, UpdateComposerParams},
};

/// Repository providing database operations for the composer collection.
pub struct ComposerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComposerRepository<'a> {
    /// Creates a new ComposerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ComposerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new composer with a freshly generated identifier.
    ///
    /// # Returns
    /// - `Ok(Composer)` - The created composer including its identifier
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateComposerParams) -> Result<Composer, DbErr> {
        let entity = entity::composer::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
        }
        .insert(self.db)
        .await?;

        Ok(Composer::from_entity(entity))
    }

    /// Gets every composer in the store's natural order.
    pub async fn get_all(&self) -> Result<Vec<Composer>, DbErr> {
        let entities = entity::prelude::Composer::find().all(self.db).await?;

        Ok(entities.into_iter().map(Composer::from_entity).collect())
    }

    /// Gets a composer by identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Composer))` - Composer found
    /// - `Ok(None)` - No composer has that identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Composer>, DbErr> {
        let entity = entity::prelude::Composer::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Composer::from_entity))
    }

    /// Overwrites the supplied fields of an existing composer.
    ///
    /// Fields left as `None` in the params keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Composer))` - Composer as persisted after the update
    /// - `Ok(None)` - No composer has that identifier; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateComposerParams) -> Result<Option<Composer>, DbErr> {
        let Some(existing) = entity::prelude::Composer::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }

        if !active.is_changed() {
            return Ok(Some(Composer::from_entity(existing)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Composer::from_entity(entity)))
    }

    /// Deletes a composer by identifier in a single statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Composer existed and was deleted
    /// - `Ok(false)` - No composer has that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Composer::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
