//! Site settings singleton model and DTOs.

use landmark_core::types::Timestamp;
use landmark_core::validation::validate_url_or_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Key of the one settings row the homepage reads.
pub const HOMEPAGE_SETTINGS_KEY: &str = "homepage_settings";

/// A row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub settings_key: String,
    pub hero_image_url: String,
    /// `None` when the settings have never been saved.
    pub updated_at: Option<Timestamp>,
}

impl SiteSettings {
    /// Settings served before an admin has saved anything.
    pub fn defaults(settings_key: &str) -> Self {
        Self {
            settings_key: settings_key.to_string(),
            hero_image_url: String::new(),
            updated_at: None,
        }
    }
}

/// DTO for saving settings. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSiteSettings {
    /// A valid URL, or empty to fall back to the built-in hero image.
    #[validate(custom(function = "validate_url_or_empty"))]
    pub hero_image_url: Option<String>,
}
