//! Team domain model and parameters.

use entity::team::Player;

use crate::model::team::{CreateTeamDto, PlayerDto, TeamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub mascot: String,
    pub players: Vec<Player>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mascot: entity.mascot,
            players: entity.players.0,
        }
    }

    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            mascot: self.mascot,
            players: self.players.into_iter().map(PlayerDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub mascot: String,
}

impl CreateTeamParams {
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            mascot: dto.mascot,
        }
    }
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            first_name: player.first_name,
            last_name: player.last_name,
            salary: player.salary,
        }
    }
}

impl From<PlayerDto> for Player {
    fn from(dto: PlayerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            salary: dto.salary,
        }
    }
}
