//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse`.
//!
//! Every failure maps to one of three statuses:
//!
//! - `500` - local fault raised before or around the store call (malformed body, hashing)
//! - `501` - the document store reported an error
//! - `401` - domain rejection (unknown id, duplicate username, bad credentials)

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Registration or login rejection.
    ///
    /// Delegates to `AuthError::into_response()`, always 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected failure inside the server, such as password hashing.
    ///
    /// Results in 500 with the failure text echoed.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 501 Not Implemented with the store's error text echoed, the
    /// status this API has always used for store faults.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body could not be read as the endpoint's input schema.
    ///
    /// Covers malformed JSON, missing or ill-typed fields and a missing
    /// `Content-Type` header. Results in 500.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameters could not be extracted. Results in 500.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// I/O failure while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// No document matched the identifier or key supplied in the path.
    ///
    /// Results in 401 Unauthorized with the provided message. Not-found is reported
    /// as 401 on every route, matching the rest of the API's domain rejections.
    ///
    /// # Fields
    /// - Message naming the invalid key, e.g. "Invalid teamId"
    #[error("{0}")]
    InvalidId(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `AuthErr` and `InvalidId`
/// - 501 Not Implemented - For `DbErr`
/// - 500 Internal Server Error - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::InvalidId(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::UNAUTHORIZED, Json(MessageDto::new(msg))).into_response()
            }
            Self::DbErr(err) => DatabaseException(err).into_response(),
            err => ServerException(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 "Server Exception" response.
pub struct ServerException<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for ServerException<E> {
    fn into_response(self) -> Response {
        tracing::error!("Server exception: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new(format!("Server Exception: {}", self.0))),
        )
            .into_response()
    }
}

/// Wrapper converting a store error into a 501 "Database Exception" response.
pub struct DatabaseException<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for DatabaseException<E> {
    fn into_response(self) -> Response {
        tracing::error!("Database exception: {}", self.0);

        (
            StatusCode::NOT_IMPLEMENTED,
            Json(MessageDto::new(format!("Database Exception: {}", self.0))),
        )
            .into_response()
    }
}
