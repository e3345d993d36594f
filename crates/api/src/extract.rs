//! Request body extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body whose rejections render as [`AppError`].
///
/// A missing content type, malformed JSON or a body that does not fit the
/// target type yields a 400 `BAD_REQUEST` JSON error instead of axum's
/// plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
