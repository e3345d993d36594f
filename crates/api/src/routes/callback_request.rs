//! Route definitions for the `/callback-requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::callback_request;
use crate::state::AppState;

/// Public routes mounted at `/callback-requests`.
///
/// ```text
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(callback_request::create))
}

/// Admin routes mounted at `/admin/callback-requests`.
///
/// ```text
/// GET    /             -> list
/// GET    /{id}         -> get_by_id
/// DELETE /{id}         -> delete
/// POST   /{id}/notes   -> add_note
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(callback_request::list))
        .route(
            "/{id}",
            get(callback_request::get_by_id).delete(callback_request::delete),
        )
        .route("/{id}/notes", post(callback_request::add_note))
}
