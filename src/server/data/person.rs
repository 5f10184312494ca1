//! Person data repository for database operations.
//!
//! Persons are created and read only; there is no update or delete.

use entity::person::{Dependents, Roles};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::new_document_id,
    model::person::{CreatePersonParams, Person},
};

pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new person together with its roles and dependents.
    ///
    /// # Returns
    /// - `Ok(Person)` - The created person including its identifier
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePersonParams) -> Result<Person, DbErr> {
        let entity = entity::person::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            birth_date: ActiveValue::Set(params.birth_date),
            roles: ActiveValue::Set(Roles(params.roles)),
            dependents: ActiveValue::Set(Dependents(params.dependents)),
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entities = entity::prelude::Person::find().all(self.db).await?;

        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Person::from_entity))
    }
}
