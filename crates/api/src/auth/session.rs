//! Server-side session verification.

use landmark_core::roles::ROLE_ADMIN;
use landmark_db::repositories::{AdminRoleRepo, AdminSessionRepo};

use crate::auth::jwt::{hash_token, validate_token, Claims};
use crate::error::AppResult;
use crate::state::AppState;

/// Check that a session token is authentic and still live.
///
/// Returns the claims only when the signature and expiry are valid and the
/// token's session row is neither revoked nor expired. Any failed check
/// yields `Ok(None)`; database errors are propagated.
pub async fn verify_session_token(state: &AppState, token: &str) -> AppResult<Option<Claims>> {
    let Ok(claims) = validate_token(token, &state.config.jwt) else {
        return Ok(None);
    };

    let hash = hash_token(token);
    if AdminSessionRepo::find_active_by_token_hash(&state.pool, &hash)
        .await?
        .is_none()
    {
        return Ok(None);
    }

    Ok(Some(claims))
}

/// Whether a session holder currently has admin permission: the session
/// carries the admin role and the subject's role-marker record exists.
pub async fn holds_admin_role(state: &AppState, subject: &str, role: &str) -> AppResult<bool> {
    if role != ROLE_ADMIN {
        return Ok(false);
    }
    Ok(AdminRoleRepo::is_granted(&state.pool, subject).await?)
}

/// [`verify_session_token`] followed by [`holds_admin_role`].
pub async fn verify_admin_session(state: &AppState, token: &str) -> AppResult<Option<Claims>> {
    let Some(claims) = verify_session_token(state, token).await? else {
        return Ok(None);
    };
    if !holds_admin_role(state, &claims.sub, &claims.role).await? {
        return Ok(None);
    }
    Ok(Some(claims))
}
