//! Repository for the `projects` table.

use landmark_core::featured::{plan_featured_change, FEATURED_LOCK_ID};
use landmark_core::listing::DEFAULT_PROJECT_STATUS;
use landmark_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, short_description, description, image_urls, location, \
    status, flat_types, elevators, land_area, level, parking, \
    meta_title, meta_description, meta_keywords, is_featured, created_at, updated_at";

/// Provides CRUD and featured-flag operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `Under Construction`.
    /// `is_featured` always starts `false`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, short_description, description, image_urls, location, status,
                 flat_types, elevators, land_area, level, parking,
                 meta_title, meta_description, meta_keywords)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, $7), $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.image_urls)
            .bind(&input.location)
            .bind(&input.status)
            .bind(DEFAULT_PROJECT_STATUS)
            .bind(Json(&input.flat_types))
            .bind(input.elevators)
            .bind(&input.land_area)
            .bind(&input.level)
            .bind(&input.parking)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Count all projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Return the featured project, if one is set.
    pub async fn find_featured(pool: &PgPool) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE is_featured = true LIMIT 1");
        sqlx::query_as::<_, Project>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// SEO fields are cleared when an empty string is supplied. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                short_description = COALESCE($3, short_description),
                description = COALESCE($4, description),
                image_urls = COALESCE($5, image_urls),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                flat_types = COALESCE($8, flat_types),
                elevators = COALESCE($9, elevators),
                land_area = COALESCE($10, land_area),
                level = COALESCE($11, level),
                parking = COALESCE($12, parking),
                meta_title = CASE WHEN $13::TEXT IS NULL THEN meta_title ELSE NULLIF($13, '') END,
                meta_description = CASE WHEN $14::TEXT IS NULL THEN meta_description ELSE NULLIF($14, '') END,
                meta_keywords = CASE WHEN $15::TEXT IS NULL THEN meta_keywords ELSE NULLIF($15, '') END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.image_urls)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.flat_types.as_ref().map(Json))
            .bind(input.elevators)
            .bind(&input.land_area)
            .bind(&input.level)
            .bind(&input.parking)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Callback requests that referenced it keep their snapshotted project
    /// name and lose the foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set or clear the featured flag on a project.
    ///
    /// Featuring a project un-features the previous one in the same
    /// transaction. Clearing only touches the given project. Returns `None`
    /// (with nothing written) if the project does not exist.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        featured: bool,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serialize featured changes so each one observes the last.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(FEATURED_LOCK_ID)
            .execute(&mut *tx)
            .await?;

        let target: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if target.is_none() {
            // Dropping the transaction rolls it back.
            return Ok(None);
        }

        let current: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM projects WHERE is_featured = true LIMIT 1 FOR UPDATE")
                .fetch_optional(&mut *tx)
                .await?;

        for write in plan_featured_change(current.map(|(c,)| c), id, featured) {
            sqlx::query("UPDATE projects SET is_featured = $2 WHERE id = $1")
                .bind(write.project_id)
                .bind(write.is_featured)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(project_id = id, featured, "Featured flag updated");
        Ok(Some(project))
    }
}
