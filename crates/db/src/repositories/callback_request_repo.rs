//! Repository for the `callback_requests` and `callback_request_notes` tables.

use std::collections::HashMap;

use landmark_core::callback::{status_after_note, STATUS_NEW};
use landmark_core::types::DbId;
use sqlx::PgPool;

use crate::models::callback_request::{CallbackNote, CallbackRequest, CallbackRequestWithNotes};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, project_id, project_name, status, created_at, updated_at";

const NOTE_COLUMNS: &str = "id, callback_request_id, text, created_at";

/// Provides lead capture, listing, deletion and the append-only note ledger.
pub struct CallbackRequestRepo;

impl CallbackRequestRepo {
    /// Insert a new request with status `New`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        phone: &str,
        project_id: Option<DbId>,
        project_name: &str,
    ) -> Result<CallbackRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO callback_requests (name, phone, project_id, project_name, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CallbackRequest>(&query)
            .bind(name)
            .bind(phone)
            .bind(project_id)
            .bind(project_name)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    /// Find a request with its notes (newest note first).
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CallbackRequestWithNotes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM callback_requests WHERE id = $1");
        let Some(request) = sqlx::query_as::<_, CallbackRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let notes = Self::list_notes(pool, id).await?;
        Ok(Some(CallbackRequestWithNotes { request, notes }))
    }

    /// List all requests newest first, each with its notes.
    pub async fn list(pool: &PgPool) -> Result<Vec<CallbackRequestWithNotes>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM callback_requests ORDER BY created_at DESC, id DESC"
        );
        let requests = sqlx::query_as::<_, CallbackRequest>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = requests.iter().map(|r| r.id).collect();
        let note_query = format!(
            "SELECT {NOTE_COLUMNS} FROM callback_request_notes
             WHERE callback_request_id = ANY($1)
             ORDER BY created_at DESC, id DESC"
        );
        let notes = sqlx::query_as::<_, CallbackNote>(&note_query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_request: HashMap<DbId, Vec<CallbackNote>> = HashMap::new();
        for note in notes {
            by_request
                .entry(note.callback_request_id)
                .or_default()
                .push(note);
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let notes = by_request.remove(&request.id).unwrap_or_default();
                CallbackRequestWithNotes { request, notes }
            })
            .collect())
    }

    /// List the notes of one request, newest first.
    pub async fn list_notes(
        pool: &PgPool,
        callback_request_id: DbId,
    ) -> Result<Vec<CallbackNote>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTE_COLUMNS} FROM callback_request_notes
             WHERE callback_request_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CallbackNote>(&query)
            .bind(callback_request_id)
            .fetch_all(pool)
            .await
    }

    /// Append a note and mark the request contacted on first note.
    ///
    /// `text` must already be normalized. The request row is locked for the
    /// duration so concurrent appends are serialized and none is lost.
    /// Returns `None` (with nothing written) if the request does not exist.
    pub async fn add_note(
        pool: &PgPool,
        id: DbId,
        text: &str,
    ) -> Result<Option<CallbackRequestWithNotes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(String,)> =
            sqlx::query_as("SELECT status FROM callback_requests WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((status,)) = current else {
            return Ok(None);
        };

        // Stamped at append time, after the lock is held.
        sqlx::query(
            "INSERT INTO callback_request_notes (callback_request_id, text, created_at, updated_at)
             VALUES ($1, $2, clock_timestamp(), clock_timestamp())",
        )
        .bind(id)
        .bind(text)
        .execute(&mut *tx)
        .await?;

        let next_status = status_after_note(&status);
        if next_status != status {
            sqlx::query("UPDATE callback_requests SET status = $2 WHERE id = $1")
                .bind(id)
                .bind(next_status)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM callback_requests WHERE id = $1");
        let request = sqlx::query_as::<_, CallbackRequest>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        let note_query = format!(
            "SELECT {NOTE_COLUMNS} FROM callback_request_notes
             WHERE callback_request_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let notes = sqlx::query_as::<_, CallbackNote>(&note_query)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(CallbackRequestWithNotes { request, notes }))
    }

    /// Delete a request and its notes. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM callback_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
