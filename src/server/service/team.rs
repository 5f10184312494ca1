//! Team service for business logic.
//!
//! Handles team creation, lookup and deletion as well as the team roster. Players have
//! no identity of their own; they are only ever appended to a team.

use entity::team::Player;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{CreateTeamParams, Team},
};

const INVALID_TEAM_ID: &str = "Invalid teamId";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with an empty roster
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a team and its roster.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(AppError::InvalidId)` - No team has the given identifier
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::InvalidId(INVALID_TEAM_ID.to_string()));
        }

        Ok(())
    }

    /// Appends a player to a team's roster.
    ///
    /// Salary is stored as submitted. The team is read, extended and written back
    /// without locking.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team as persisted, with the player last
    /// - `Err(AppError::InvalidId)` - No team has the given identifier
    /// - `Err(AppError::DbErr)` - Database error during read or write
    pub async fn add_player(&self, id: &str, player: Player) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        repo.append_player(id, player)
            .await?
            .ok_or_else(|| AppError::InvalidId(INVALID_TEAM_ID.to_string()))
    }

    /// Gets a team's roster in append order.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players of the team, possibly empty
    /// - `Err(AppError::InvalidId)` - No team has the given identifier
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_players(&self, id: &str) -> Result<Vec<Player>, AppError> {
        let repo = TeamRepository::new(self.db);

        let team = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::InvalidId(INVALID_TEAM_ID.to_string()))?;

        Ok(team.players)
    }
}
