//! Handlers for the `/contact-messages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use landmark_core::error::CoreError;
use landmark_core::types::DbId;
use landmark_db::models::contact_message::{ContactMessage, CreateContactMessage};
use landmark_db::repositories::ContactMessageRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/contact-messages
///
/// Public contact form submission.
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    input.name = input.name.trim().to_string();
    input.email = input.email.trim().to_string();
    input.phone = input.phone.trim().to_string();
    input.message = input.message.trim().to_string();
    input.validate()?;

    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::debug!(message_id = message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/admin/contact-messages
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// DELETE /api/v1/admin/contact-messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactMessageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(subject = %admin.subject, message_id = id, "Contact message deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))
    }
}
