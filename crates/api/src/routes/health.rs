//! `GET /health`: liveness plus a summary of what the public homepage can
//! render right now.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use landmark_core::types::DbId;
use landmark_db::models::site_settings::HOMEPAGE_SETTINGS_KEY;
use landmark_db::repositories::{ProjectRepo, SiteSettingsRepo};
use landmark_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Omitted when the database could not be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentStatus>,
}

/// Homepage readiness.
#[derive(Debug, Serialize)]
pub struct ContentStatus {
    pub project_count: i64,
    pub featured_project_id: Option<DbId>,
    pub hero_image_set: bool,
}

async fn content_status(pool: &DbPool) -> Result<ContentStatus, sqlx::Error> {
    let project_count = ProjectRepo::count(pool).await?;
    let featured_project_id = ProjectRepo::find_featured(pool).await?.map(|p| p.id);
    let hero_image_set = SiteSettingsRepo::find(pool, HOMEPAGE_SETTINGS_KEY)
        .await?
        .is_some_and(|s| !s.hero_image_url.is_empty());

    Ok(ContentStatus {
        project_count,
        featured_project_id,
        hero_image_set,
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let content = match content_status(&state.pool).await {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not query the database");
            None
        }
    };
    let db_healthy = content.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        content,
    })
}

/// Mounted at the root, outside `/api/v1`, so load balancers need no prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
