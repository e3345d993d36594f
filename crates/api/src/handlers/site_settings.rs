//! Handlers for the `/site-settings` resource.

use axum::extract::State;
use axum::Json;
use landmark_db::models::site_settings::{SiteSettings, UpdateSiteSettings, HOMEPAGE_SETTINGS_KEY};
use landmark_db::repositories::SiteSettingsRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/site-settings
///
/// Returns the homepage settings, or the defaults if never saved.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::find(&state.pool, HOMEPAGE_SETTINGS_KEY)
        .await?
        .unwrap_or_else(|| SiteSettings::defaults(HOMEPAGE_SETTINGS_KEY));
    Ok(Json(settings))
}

/// PUT /api/v1/admin/site-settings
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(mut input): AppJson<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    input.hero_image_url = input.hero_image_url.map(|url| url.trim().to_string());
    input.validate()?;

    let settings = SiteSettingsRepo::upsert(&state.pool, HOMEPAGE_SETTINGS_KEY, &input).await?;
    tracing::info!(subject = %admin.subject, "Site settings updated");
    Ok(Json(settings))
}
