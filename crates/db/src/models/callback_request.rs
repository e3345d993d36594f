//! Callback request (lead) and note ledger models and DTOs.

use landmark_core::types::{DbId, Timestamp};
use landmark_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `callback_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CallbackRequest {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    /// `None` for general inquiries, or after the project was deleted.
    pub project_id: Option<DbId>,
    /// Project title captured when the request was made.
    pub project_name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `callback_request_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CallbackNote {
    pub id: DbId,
    pub callback_request_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
}

/// A callback request together with its notes, newest note first.
#[derive(Debug, Clone, Serialize)]
pub struct CallbackRequestWithNotes {
    #[serde(flatten)]
    pub request: CallbackRequest,
    pub notes: Vec<CallbackNote>,
}

/// DTO for the public callback form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCallbackRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub phone: String,
    /// Project the visitor was viewing, if any.
    pub project_id: Option<DbId>,
}

/// Request body for `POST /admin/callback-requests/{id}/notes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCallbackNote {
    pub text: String,
}
