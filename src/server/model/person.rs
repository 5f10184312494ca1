//! Person domain model and parameters.
//!
//! Roles and dependents are owned by the person and stored inline with it, in the
//! order they were submitted.

use entity::person::{Dependent, Role};

use crate::model::person::{CreatePersonDto, DependentDto, PersonDto, RoleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
}

impl Person {
    /// Converts an entity model to a person domain model at the repository boundary.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            birth_date: entity.birth_date,
            roles: entity.roles.0,
            dependents: entity.dependents.0,
        }
    }

    /// Converts the person domain model to a DTO for API responses.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            roles: self.roles.into_iter().map(RoleDto::from).collect(),
            dependents: self.dependents.into_iter().map(DependentDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePersonParams {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
}

impl CreatePersonParams {
    pub fn from_dto(dto: CreatePersonDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            birth_date: dto.birth_date,
            roles: dto.roles.into_iter().map(Role::from).collect(),
            dependents: dto.dependents.into_iter().map(Dependent::from).collect(),
        }
    }
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self { text: role.text }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        Self { text: dto.text }
    }
}

impl From<Dependent> for DependentDto {
    fn from(dependent: Dependent) -> Self {
        Self {
            first_name: dependent.first_name,
            last_name: dependent.last_name,
        }
    }
}

impl From<DependentDto> for Dependent {
    fn from(dto: DependentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
