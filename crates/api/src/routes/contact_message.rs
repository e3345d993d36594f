//! Route definitions for the `/contact-messages` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::contact_message;
use crate::state::AppState;

/// Public routes mounted at `/contact-messages`.
///
/// ```text
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact_message::create))
}

/// Admin routes mounted at `/admin/contact-messages`.
///
/// ```text
/// GET    /       -> list
/// DELETE /{id}   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact_message::list))
        .route("/{id}", delete(contact_message::delete))
}
