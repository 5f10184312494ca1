use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::MessageDto,
        composer::{ComposerDto, CreateComposerDto, UpdateComposerDto},
    },
    server::{
        error::AppError,
        model::composer::{CreateComposerParams, UpdateComposerParams},
        service::composer::ComposerService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping composer endpoints in OpenAPI documentation
pub static COMPOSER_TAG: &str = "Composers";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_composers, create_composer))
        .routes(routes!(get_composer, update_composer, delete_composer))
}

/// List all composers.
///
/// # Returns
/// - `200 OK` - Every composer in insertion order
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    responses(
        (status = 200, description = "All composers", body = Vec<ComposerDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_composers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let composers = ComposerService::new(&state.db).get_all().await?;

    let dtos: Vec<ComposerDto> = composers.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a composer by identifier.
///
/// An unknown identifier is answered with `null` rather than an error.
///
/// # Returns
/// - `200 OK` - The composer, or `null`
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer identifier")
    ),
    responses(
        (status = 200, description = "The composer, or null when none matches", body = Option<ComposerDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_composer(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let composer = ComposerService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(composer.map(|c| c.into_dto()))))
}

/// Create a composer.
///
/// # Returns
/// - `200 OK` - The created composer including its identifier
/// - `500 Internal Server Error` - Body missing a field or not JSON
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    request_body = CreateComposerDto,
    responses(
        (status = 200, description = "Created composer", body = ComposerDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn create_composer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateComposerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateComposerParams::from_dto(payload);

    let composer = ComposerService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(composer.into_dto())))
}

/// Update a composer.
///
/// Only the fields present in the body are overwritten.
///
/// # Returns
/// - `200 OK` - The updated composer
/// - `401 Unauthorized` - No composer has the identifier
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    put,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer identifier")
    ),
    request_body = UpdateComposerDto,
    responses(
        (status = 200, description = "Updated composer", body = ComposerDto),
        (status = 401, description = "Invalid composerId", body = MessageDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn update_composer(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<UpdateComposerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateComposerParams::from_dto(id, payload);

    let composer = ComposerService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(composer.into_dto())))
}

/// Delete a composer.
///
/// # Returns
/// - `200 OK` - Confirmation naming the deleted identifier
/// - `401 Unauthorized` - No composer has the identifier
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    delete,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer identifier")
    ),
    responses(
        (status = 200, description = "Composer deleted", body = MessageDto),
        (status = 401, description = "Invalid composerId", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn delete_composer(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    ComposerService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Composer document deleted: {}", id))),
    ))
}
