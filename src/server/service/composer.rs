use sea_orm::DatabaseConnection;

use crate::server::{
    data::composer::ComposerRepository,
    error::AppError,
    model::composer::{Composer, CreateComposerParams, UpdateComposerParams},
};

const INVALID_COMPOSER_ID: &str = "Invalid composerId";

pub struct ComposerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComposerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateComposerParams) -> Result<Composer, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a composer by identifier; an unknown identifier is not an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Overwrites the supplied fields of an existing composer.
    ///
    /// # Returns
    /// - `Ok(Composer)` - Composer as persisted after the update
    /// - `Err(AppError::InvalidId)` - No composer has the given identifier
    /// - `Err(AppError::DbErr)` - Database error during read or write
    pub async fn update(&self, params: UpdateComposerParams) -> Result<Composer, AppError> {
        let repo = ComposerRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::InvalidId(INVALID_COMPOSER_ID.to_string()))
    }

    /// Deletes a composer by identifier.
    ///
    /// # Returns
    /// - `Ok(())` - Composer deleted
    /// - `Err(AppError::InvalidId)` - No composer has the given identifier
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = ComposerRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::InvalidId(INVALID_COMPOSER_ID.to_string()));
        }

        Ok(())
    }
}
