use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::team::Player;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::MessageDto,
        team::{CreateTeamDto, PlayerDto, TeamDto},
    },
    server::{
        error::AppError,
        model::team::CreateTeamParams,
        service::team::TeamService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "Teams";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_teams, create_team))
        .routes(routes!(get_team, delete_team))
        .routes(routes!(get_players, add_player))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team identifier")
    ),
    responses(
        (status = 200, description = "The team, or null when none matches", body = Option<TeamDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(team.map(|t| t.into_dto()))))
}

/// Create a team.
///
/// The team starts with an empty roster.
///
/// # Returns
/// - `200 OK` - The created team including its identifier
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "Created team", body = TeamDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTeamParams::from_dto(payload);

    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team together with its roster.
///
/// # Returns
/// - `200 OK` - Confirmation naming the deleted identifier
/// - `401 Unauthorized` - No team has the identifier
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team identifier")
    ),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 401, description = "Invalid teamId", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Team document deleted: {}", id))),
    ))
}

/// Add a player to a team.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - No team has the identifier
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team identifier")
    ),
    request_body = PlayerDto,
    responses(
        (status = 200, description = "Player added", body = MessageDto),
        (status = 401, description = "Invalid teamId", body = MessageDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn add_player(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<PlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db)
        .add_player(&id, Player::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Player added to team"))))
}

/// List a team's players in the order they were added.
///
/// # Returns
/// - `200 OK` - The team's players
/// - `401 Unauthorized` - No team has the identifier
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team identifier")
    ),
    responses(
        (status = 200, description = "The team's players", body = Vec<PlayerDto>),
        (status = 401, description = "Invalid teamId", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let players = TeamService::new(&state.db).get_players(&id).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(PlayerDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
