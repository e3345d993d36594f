//! Project listing constants and input normalization.

use validator::ValidationError;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

pub const STATUS_UNDER_CONSTRUCTION: &str = "Under Construction";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_SOLD: &str = "Sold";
pub const STATUS_UPCOMING: &str = "Upcoming";

/// All valid project statuses. Must match the `ck_projects_status` check
/// constraint.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_UNDER_CONSTRUCTION,
    STATUS_COMPLETED,
    STATUS_SOLD,
    STATUS_UPCOMING,
];

/// Status assigned when a create request omits it.
pub const DEFAULT_PROJECT_STATUS: &str = STATUS_UNDER_CONSTRUCTION;

/// Validate that the status is one of [`VALID_PROJECT_STATUSES`].
pub fn validate_project_status(status: &str) -> Result<(), ValidationError> {
    if VALID_PROJECT_STATUSES.contains(&status) {
        return Ok(());
    }
    let mut err = ValidationError::new("project_status");
    err.message = Some(
        format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_PROJECT_STATUSES.join(", ")
        )
        .into(),
    );
    Err(err)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Trim image URLs and drop blank entries.
///
/// Admin forms submit one input per image, so trailing empty rows are common.
/// Validation runs on the normalized list.
pub fn normalize_image_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

/// Convert blank optional SEO text into `None`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Trim a supplied SEO field on update.
///
/// Unlike [`blank_to_none`] a blank value stays `Some("")`, which the
/// repository reads as "clear the stored value"; `None` keeps it.
pub fn trim_supplied(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
