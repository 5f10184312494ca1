use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::MessageDto,
        person::{CreatePersonDto, PersonDto},
    },
    server::{
        error::AppError,
        model::person::CreatePersonParams,
        service::person::PersonService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PERSON_TAG: &str = "Persons";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_persons, create_person))
        .routes(routes!(get_person))
}

#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "All persons", body = Vec<PersonDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_persons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let persons = PersonService::new(&state.db).get_all().await?;

    let dtos: Vec<PersonDto> = persons.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = String, Path, description = "Person identifier")
    ),
    responses(
        (status = 200, description = "The person, or null when none matches", body = Option<PersonDto>),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(person.map(|p| p.into_dto()))))
}

/// Create a person.
///
/// Roles and dependents may be omitted and default to empty lists; their order is
/// kept as submitted.
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "Created person", body = PersonDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePersonParams::from_dto(payload);

    let person = PersonService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}
