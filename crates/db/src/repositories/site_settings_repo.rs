//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

const COLUMNS: &str = "settings_key, hero_image_url, updated_at";

/// Reads and upserts keyed settings rows.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Find the settings row for `key`, if it has ever been saved.
    pub async fn find(pool: &PgPool, key: &str) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE settings_key = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or merge the settings row for `key`.
    ///
    /// Fields left `None` keep their stored value (or the column default on
    /// first save).
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (settings_key, hero_image_url)
             VALUES ($1, COALESCE($2, ''))
             ON CONFLICT (settings_key) DO UPDATE SET
                hero_image_url = COALESCE($2, site_settings.hero_image_url)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(key)
            .bind(&input.hero_image_url)
            .fetch_one(pool)
            .await
    }
}
