//! Person factory for creating test person documents.

use crate::factory::helpers::{document_id, next_id};
use entity::person::{Dependent, Dependents, Role, Roles};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let person = PersonFactory::new(&db)
///     .role("Librarian")
///     .dependent("Sam", "Doe")
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    birth_date: String,
    roles: Vec<Role>,
    dependents: Vec<Dependent>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Person"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - birth_date: `"1970-01-01"`
    /// - no roles and no dependents
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Person".to_string(),
            last_name: id.to_string(),
            birth_date: "1970-01-01".to_string(),
            roles: Vec::new(),
            dependents: Vec::new(),
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

    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }

    /// Appends a role to the person's ordered role list.
    pub fn role(mut self, text: impl Into<String>) -> Self {
        self.roles.push(Role { text: text.into() });
        self
    }

    /// Appends a dependent to the person's ordered dependent list.
    pub fn dependent(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.dependents.push(Dependent {
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
        self
    }

    /// Builds and inserts the person document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - Created person
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            id: ActiveValue::Set(document_id()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birth_date: ActiveValue::Set(self.birth_date),
            roles: ActiveValue::Set(Roles(self.roles)),
            dependents: ActiveValue::Set(Dependents(self.dependents)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
