//! User domain model and parameters.

use crate::model::user::{LoginDto, RegisterUserDto, UserDto};

/// Registered user. `password` is always the stored digest.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            password: entity.password,
            email_address: entity.email_address,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            password: self.password,
            email_address: self.email_address,
        }
    }
}

/// Registration input; `password` is plaintext until the service hashes it.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
            email_address: dto.email_address,
        }
    }
}

/// Parameters for inserting a user whose password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub password_digest: String,
    pub email_address: String,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub user_name: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
        }
    }
}
