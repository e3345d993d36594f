//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET /            -> list
/// GET /featured    -> featured
/// GET /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/featured", get(project::featured))
        .route("/{id}", get(project::get_by_id))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// POST   /                -> create
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// PUT    /{id}/featured   -> set_featured
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(project::create))
        .route("/{id}", put(project::update).delete(project::delete))
        .route("/{id}/featured", put(project::set_featured))
}
