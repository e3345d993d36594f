//! Handlers for the `/auth` resource (PIN login, session check, logout).

use axum::extract::State;
use axum::http::header::{SET_COOKIE, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::Json;
use chrono::Utc;
use landmark_core::error::CoreError;
use landmark_core::pin::{self, PinRejection, SessionState};
use landmark_core::roles::{ADMIN_SUBJECT, ROLE_ADMIN};
use landmark_db::models::admin::CreateAdminSession;
use landmark_db::repositories::{AdminRoleRepo, AdminSessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, read_cookie, session_cookie, SESSION_COOKIE};
use crate::auth::jwt::{generate_session_token, hash_token};
use crate::auth::pin::verify_pin;
use crate::auth::session::verify_admin_session;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/pin`.
#[derive(Debug, Deserialize)]
pub struct PinLoginRequest {
    pub pin: String,
}

/// Successful login response. The same token is also set as a cookie.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// Response body for `GET /auth/session-token`.
#[derive(Debug, Serialize)]
pub struct SessionTokenResponse {
    pub token: String,
}

/// Response body for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub is_valid: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/pin
///
/// Exchange the admin PIN for a session. On success the admin role is
/// granted to the stable admin subject, a session row is recorded and the
/// token is returned in the body and as an `httpOnly` cookie.
pub async fn pin_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(input): AppJson<PinLoginRequest>,
) -> AppResult<([(HeaderName, String); 1], Json<SessionResponse>)> {
    let pin_hash = &state.config.admin.pin_hash;
    let outcome = pin::authenticate(&input.pin, |candidate| verify_pin(candidate, pin_hash))
        .map_err(|e| AppError::InternalError(format!("PIN verification error: {e}")))?;

    match outcome {
        SessionState::Authenticated => {}
        SessionState::Rejected(PinRejection::InvalidFormat) => {
            return Err(AppError::Core(CoreError::Validation(
                PinRejection::InvalidFormat.message().into(),
            )));
        }
        SessionState::Rejected(PinRejection::Mismatch) => {
            tracing::warn!("Rejected admin PIN attempt");
            return Err(AppError::Core(CoreError::Unauthorized(
                PinRejection::Mismatch.message().into(),
            )));
        }
        other => {
            return Err(AppError::InternalError(format!(
                "PIN login ended in unexpected state {other:?}"
            )));
        }
    }

    AdminRoleRepo::grant(&state.pool, ADMIN_SUBJECT).await?;

    let token = generate_session_token(ADMIN_SUBJECT, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let expires_in = state.config.jwt.session_expiry_secs();

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let session_input = CreateAdminSession {
        subject: ADMIN_SUBJECT.to_string(),
        token_hash: hash_token(&token),
        expires_at: Utc::now() + chrono::Duration::seconds(expires_in),
        user_agent,
    };
    AdminSessionRepo::create(&state.pool, &session_input).await?;

    tracing::info!(subject = ADMIN_SUBJECT, "Admin signed in with PIN");

    let cookie = session_cookie(&token, expires_in, state.config.admin.cookie_secure);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(SessionResponse { token, expires_in }),
    ))
}

/// GET /api/v1/auth/session-token
///
/// Hand the `httpOnly` session cookie's token to the admin client so it can
/// send it as a Bearer token. 401 when no live session cookie is present.
pub async fn session_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<SessionTokenResponse>> {
    let token = read_cookie(&headers, SESSION_COOKIE)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not authenticated".into())))?;

    if verify_admin_session(&state, token).await?.is_none() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Not authenticated".into(),
        )));
    }

    Ok(Json(SessionTokenResponse {
        token: token.to_string(),
    }))
}

/// GET /api/v1/auth/session
///
/// Report whether the session cookie is valid: 200 `{is_valid: true}` or
/// 401 `{is_valid: false}`.
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<(StatusCode, Json<SessionStatus>)> {
    let is_valid = match read_cookie(&headers, SESSION_COOKIE) {
        Some(token) => verify_admin_session(&state, token).await?.is_some(),
        None => false,
    };

    let status = if is_valid {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    Ok((status, Json(SessionStatus { is_valid })))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the session's subject, purge dead session rows,
/// and clear the cookie. Any live session may sign out, even one whose role
/// grant has been withdrawn. Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    admin: AuthUser,
) -> AppResult<([(HeaderName, String); 1], StatusCode)> {
    let revoked = AdminSessionRepo::revoke_all_for_subject(&state.pool, &admin.subject).await?;
    let purged = AdminSessionRepo::cleanup_expired(&state.pool).await?;
    tracing::info!(subject = %admin.subject, revoked, purged, "Admin signed out");

    let cookie = clear_session_cookie(state.config.admin.cookie_secure);
    Ok(([(SET_COOKIE, cookie)], StatusCode::NO_CONTENT))
}
