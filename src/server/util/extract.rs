//! Request extractors that route rejections through `AppError`.
//!
//! Axum's own `Json` and `Path` extractors answer malformed input with 4xx responses.
//! These wrappers turn the same rejections into `AppError`, so a body or path that
//! cannot be read is reported like any other local fault.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body extractor.
///
/// Deserializes into the endpoint's input schema. Fields not declared by the schema
/// are ignored; missing or ill-typed declared fields are rejected.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
