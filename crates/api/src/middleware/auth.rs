//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use landmark_core::error::CoreError;

use crate::auth::cookie::{read_cookie, SESSION_COOKIE};
use crate::auth::session::verify_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated session holder.
///
/// The token is taken from an `Authorization: Bearer <token>` header when
/// present, otherwise from the session cookie. It must map to a live
/// server-side session. Role checks are left to
/// [`RequireAdmin`](super::rbac::RequireAdmin).
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(subject = %user.subject, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Stable admin identifier (from `claims.sub`).
    pub subject: String,
    /// The role name carried by the session (e.g. `"admin"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization format. Expected: Bearer <token>".into(),
                    ))
                })?,
            None => read_cookie(&parts.headers, SESSION_COOKIE).ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Not authenticated".into()))
            })?,
        };

        let claims = verify_session_token(state, token).await?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(AuthUser {
            subject: claims.sub,
            role: claims.role,
        })
    }
}
