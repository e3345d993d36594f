//! Route definitions for the `/site-settings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::site_settings;
use crate::state::AppState;

/// Public routes mounted at `/site-settings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(site_settings::get))
}

/// Admin routes mounted at `/admin/site-settings`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", put(site_settings::update))
}
