//! Composer domain model and parameters.

use crate::model::composer::{ComposerDto, CreateComposerDto, UpdateComposerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Composer {
    /// Converts an entity model to a composer domain model at the repository boundary.
    pub fn from_entity(entity: entity::composer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Converts the composer domain model to a DTO for API responses.
    pub fn into_dto(self) -> ComposerDto {
        ComposerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateComposerParams {
    pub first_name: String,
    pub last_name: String,
}

impl CreateComposerParams {
    pub fn from_dto(dto: CreateComposerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Parameters for overwriting a composer's mutable fields.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateComposerParams {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateComposerParams {
    pub fn from_dto(id: String, dto: UpdateComposerDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
