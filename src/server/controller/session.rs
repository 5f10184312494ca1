use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::MessageDto,
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParams, RegisterUserParams},
        service::session::SessionService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping registration and login endpoints in OpenAPI documentation
pub static USER_TAG: &str = "Users";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
}

/// Register a new user.
///
/// The password is stored as a salted digest; the response echoes the stored record,
/// so its `Password` field carries the digest rather than the plaintext.
///
/// # Returns
/// - `200 OK` - The registered user
/// - `401 Unauthorized` - userName already in use
/// - `500 Internal Server Error` - Malformed request body or hashing failure
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Registered user", body = UserDto),
        (status = 401, description = "Username is already in use", body = MessageDto),
        (status = 500, description = "Malformed request body or hashing failure", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload);

    let user = SessionService::new(&state.db, &state.credentials)
        .register(params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Check a userName and password.
///
/// No session or token is issued; a successful response only confirms the
/// credentials.
///
/// # Returns
/// - `200 OK` - "User logged in"
/// - `401 Unauthorized` - Unknown userName or wrong password, indistinguishably
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageDto),
        (status = 401, description = "Invalid username and/or password", body = MessageDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload);

    SessionService::new(&state.db, &state.credentials)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User logged in"))))
}
