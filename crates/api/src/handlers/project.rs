//! Handlers for the `/projects` resource (public reads and admin management).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use landmark_core::error::CoreError;
use landmark_core::listing::{blank_to_none, normalize_image_urls, trim_supplied};
use landmark_core::types::DbId;
use landmark_db::models::project::{CreateProject, Project, SetFeatured, UpdateProject};
use landmark_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/featured
///
/// Returns the featured project, or `null` when none is featured.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Option<Project>>> {
    let project = ProjectRepo::find_featured(&state.pool).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(mut input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.image_urls = normalize_image_urls(input.image_urls);
    input.meta_title = blank_to_none(input.meta_title);
    input.meta_description = blank_to_none(input.meta_description);
    input.meta_keywords = blank_to_none(input.meta_keywords);
    input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(subject = %admin.subject, project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(mut input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.image_urls = input.image_urls.map(normalize_image_urls);
    input.meta_title = trim_supplied(input.meta_title);
    input.meta_description = trim_supplied(input.meta_description);
    input.meta_keywords = trim_supplied(input.meta_keywords);
    input.validate()?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(subject = %admin.subject, project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(subject = %admin.subject, project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// PUT /api/v1/admin/projects/{id}/featured
///
/// Feature or un-feature a project. Featuring one project un-features the
/// previous one atomically.
pub async fn set_featured(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<SetFeatured>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::set_featured(&state.pool, id, input.featured)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        subject = %admin.subject,
        project_id = id,
        featured = input.featured,
        "Featured project changed"
    );
    Ok(Json(project))
}
