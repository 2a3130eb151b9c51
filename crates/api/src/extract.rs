//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`] except that every rejection (bad syntax,
/// wrong field types, missing `Content-Type`) becomes a 400 through
/// [`AppError`]. The handler never runs for a body that did not parse.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
