//! Team data repository for database operations.

use entity::team::{Player, Players};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::{nested::NestedCollectionMutator, new_document_id},
    model::team::{CreateTeamParams, Team},
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team with an empty roster.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team including its identifier
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            name: ActiveValue::Set(params.name),
            mascot: ActiveValue::Set(params.mascot),
            players: ActiveValue::Set(Players::default()),
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find().all(self.db).await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Appends a player to the roster of the team with the given identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team as persisted, with the player last
    /// - `Ok(None)` - No team has that identifier
    /// - `Err(DbErr)` - Database error during read or write
    pub async fn append_player(&self, id: &str, player: Player) -> Result<Option<Team>, DbErr> {
        let entity = NestedCollectionMutator::new(self.db)
            .append_child::<entity::prelude::Team, _, _>(
                entity::team::Column::Id,
                id,
                entity::team::Column::Players,
                |team| &mut team.players.0,
                player,
            )
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Deletes a team by identifier in a single statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Team existed and was deleted
    /// - `Ok(false)` - No team has that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
