//! Callback-request (lead) statuses and note ledger rules.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_NEW: &str = "New";
pub const STATUS_CONTACTED: &str = "Contacted";

/// Project name recorded when a visitor asks for a callback without picking
/// a project.
pub const GENERAL_INQUIRY: &str = "General Inquiry";

/// Maximum length of a note in characters.
pub const MAX_NOTE_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// Note rules
// ---------------------------------------------------------------------------

/// Validate a note and return the text to store.
///
/// Leading and trailing whitespace is stripped; the result must be non-empty
/// and at most [`MAX_NOTE_LENGTH`] characters.
pub fn normalize_note_text(text: &str) -> Result<String, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Note cannot be empty.".to_string());
    }
    if trimmed.chars().count() > MAX_NOTE_LENGTH {
        return Err(format!(
            "Note exceeds maximum length of {MAX_NOTE_LENGTH} characters"
        ));
    }
    Ok(trimmed.to_string())
}

/// Status a request moves to once a note is added.
///
/// The first contact flips `New` to `Contacted`; any other status is kept.
pub fn status_after_note(current: &str) -> &str {
    if current == STATUS_NEW {
        STATUS_CONTACTED
    } else {
        current
    }
}
