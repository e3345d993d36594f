//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /pin            -> pin_login
/// GET  /session-token  -> session_token (session cookie)
/// GET  /session        -> session (session cookie)
/// POST /logout         -> logout (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pin", post(auth::pin_login))
        .route("/session-token", get(auth::session_token))
        .route("/session", get(auth::session))
        .route("/logout", post(auth::logout))
}
