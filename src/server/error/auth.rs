use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A user with the requested userName already exists.
    #[error("Username is already in use")]
    UsernameInUse,

    /// Login failed.
    ///
    /// Used both for an unknown userName and for a wrong password so the response
    /// does not reveal which userNames exist.
    #[error("Invalid username and/or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is a 401 Unauthorized carrying the variant's fixed message. Nothing
/// from the underlying lookup or verification is echoed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication rejected: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(MessageDto::new(self.to_string())),
        )
            .into_response()
    }
}
