pub mod auth;
pub mod callback_request;
pub mod contact_message;
pub mod health;
pub mod project;
pub mod site_settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/pin                                  PIN login (public)
/// /auth/session-token                        session token from cookie
/// /auth/session                              session validity from cookie
/// /auth/logout                               logout (admin)
///
/// /projects                                  list (public)
/// /projects/featured                         featured project or null (public)
/// /projects/{id}                             get (public)
/// /site-settings                             homepage settings (public)
/// /contact-messages                          submit (public)
/// /callback-requests                         submit (public)
///
/// /admin/projects                            create (admin)
/// /admin/projects/{id}                       update, delete (admin)
/// /admin/projects/{id}/featured              set featured flag (admin)
/// /admin/contact-messages                    list (admin)
/// /admin/contact-messages/{id}               delete (admin)
/// /admin/callback-requests                   list with notes (admin)
/// /admin/callback-requests/{id}              get, delete (admin)
/// /admin/callback-requests/{id}/notes        add note (admin)
/// /admin/site-settings                       upsert (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/site-settings", site_settings::router())
        .nest("/contact-messages", contact_message::router())
        .nest("/callback-requests", callback_request::router())
        .nest("/admin", admin_routes())
}

/// Admin-only routes. Each handler enforces `RequireAdmin`.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::admin_router())
        .nest("/contact-messages", contact_message::admin_router())
        .nest("/callback-requests", callback_request::admin_router())
        .nest("/site-settings", site_settings::admin_router())
}
