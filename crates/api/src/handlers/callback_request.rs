//! Handlers for the `/callback-requests` resource and its note ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use landmark_core::callback::{normalize_note_text, GENERAL_INQUIRY};
use landmark_core::error::CoreError;
use landmark_core::types::DbId;
use landmark_db::models::callback_request::{
    CallbackRequest, CallbackRequestWithNotes, CreateCallbackNote, CreateCallbackRequest,
};
use landmark_db::repositories::{CallbackRequestRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CallbackRequest",
        id,
    })
}

/// POST /api/v1/callback-requests
///
/// Public callback form. When `project_id` is given the project must exist
/// and its current title is recorded; otherwise the request is filed as a
/// general inquiry.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCallbackRequest>,
) -> AppResult<(StatusCode, Json<CallbackRequest>)> {
    input.validate()?;

    let project_name = match input.project_id {
        Some(project_id) => {
            ProjectRepo::find_by_id(&state.pool, project_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Project",
                    id: project_id,
                }))?
                .title
        }
        None => GENERAL_INQUIRY.to_string(),
    };

    let request = CallbackRequestRepo::create(
        &state.pool,
        input.name.trim(),
        input.phone.trim(),
        input.project_id,
        &project_name,
    )
    .await?;
    tracing::debug!(request_id = request.id, project = %project_name, "Callback request received");
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/admin/callback-requests
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<CallbackRequestWithNotes>>> {
    let requests = CallbackRequestRepo::list(&state.pool).await?;
    Ok(Json(requests))
}

/// GET /api/v1/admin/callback-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<CallbackRequestWithNotes>> {
    let request = CallbackRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(request))
}

/// DELETE /api/v1/admin/callback-requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CallbackRequestRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(subject = %admin.subject, request_id = id, "Callback request deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/admin/callback-requests/{id}/notes
///
/// Append a note. The first note moves a `New` request to `Contacted`.
/// Returns the request with its full note list.
pub async fn add_note(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateCallbackNote>,
) -> AppResult<(StatusCode, Json<CallbackRequestWithNotes>)> {
    let text = normalize_note_text(&input.text)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let request = CallbackRequestRepo::add_note(&state.pool, id, &text)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        subject = %admin.subject,
        request_id = id,
        status = %request.request.status,
        notes = request.notes.len(),
        "Callback note added"
    );
    Ok((StatusCode::CREATED, Json(request)))
}
