use sea_orm::DatabaseConnection;

use crate::server::{
    data::person::PersonRepository,
    error::AppError,
    model::person::{CreatePersonParams, Person},
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person along with its roles and dependents
    pub async fn create(&self, params: CreatePersonParams) -> Result<Person, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}
