use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// Player as submitted to and returned from the player routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub first_name: String,
    pub last_name: String,
    /// Kept exactly as submitted, integer or fractional.
    #[schema(value_type = f64)]
    pub salary: Number,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub mascot: String,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub mascot: String,
}
