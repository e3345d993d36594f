//! Field-level validation helpers.
//!
//! Input DTOs derive [`validator::Validate`]; the custom validators here are
//! referenced from those derives. [`FieldErrors`] flattens a
//! [`validator::ValidationErrors`] tree into `field -> messages` so the API
//! can return errors that forms render inline.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Per-field validation messages, keyed by field path.
///
/// Nested list fields use `name[index].field` paths, e.g.
/// `flat_types[1].area`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn collect(&mut self, prefix: &str, errors: &ValidationErrors) {
        for (field, kind) in errors.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{prefix}.{field}")
            };
            match kind {
                ValidationErrorsKind::Field(errs) => {
                    for err in errs {
                        self.add(path.clone(), message_for(err));
                    }
                }
                ValidationErrorsKind::Struct(inner) => self.collect(&path, inner),
                ValidationErrorsKind::List(items) => {
                    for (index, inner) in items {
                        self.collect(&format!("{path}[{index}]"), inner);
                    }
                }
            }
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        out.collect("", errors);
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

fn message_for(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", err.code),
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ---------------------------------------------------------------------------
// Custom validators
// ---------------------------------------------------------------------------

/// Reject strings that are empty or contain only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("blank", "This field is required."));
    }
    Ok(())
}

/// Require a non-empty list in which every entry is a valid absolute URL.
pub fn validate_url_list(urls: &[String]) -> Result<(), ValidationError> {
    if urls.is_empty() {
        return Err(error_with_message(
            "url_list_empty",
            "At least one image URL is required.",
        ));
    }
    if urls.iter().any(|u| !u.validate_url()) {
        return Err(error_with_message("url_list_invalid", "Invalid URL"));
    }
    Ok(())
}

/// Accept either an empty string or a valid URL.
pub fn validate_url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(error_with_message("url", "Please enter a valid URL."))
    }
}
