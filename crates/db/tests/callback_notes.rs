//! Database-level tests for callback requests and the note ledger.

use landmark_db::repositories::CallbackRequestRepo;
use sqlx::PgPool;

async fn new_request(pool: &PgPool, name: &str) -> i64 {
    CallbackRequestRepo::create(pool, name, "01711000000", None, "General Inquiry")
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_request_has_no_notes(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let request = CallbackRequestRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(request.request.status, "New");
    assert_eq!(request.request.project_name, "General Inquiry");
    assert!(request.notes.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_note_marks_contacted(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let request = CallbackRequestRepo::add_note(&pool, id, "called back")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.request.status, "Contacted");
    assert_eq!(request.notes.len(), 1);
    assert_eq!(request.notes[0].text, "called back");

    let request = CallbackRequestRepo::add_note(&pool, id, "sent brochure")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.request.status, "Contacted");
    assert_eq!(request.notes.len(), 2);
    assert_eq!(request.notes[0].text, "sent brochure", "newest first");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_note_on_missing_request(pool: PgPool) {
    let result = CallbackRequestRepo::add_note(&pool, 999_999, "hello").await.unwrap();
    assert!(result.is_none());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM callback_request_notes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// The schema refuses blank notes even if a caller skips normalization.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_note_is_refused_by_schema(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let result = CallbackRequestRepo::add_note(&pool, id, "   ").await;
    assert!(result.is_err());

    let request = CallbackRequestRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(request.request.status, "New");
    assert!(request.notes.is_empty());
}

/// Concurrent appends are all kept.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_notes_are_not_lost(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let pool = pool.clone();
            tokio::spawn(async move {
                CallbackRequestRepo::add_note(&pool, id, &format!("note {i}")).await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap().unwrap();
    }

    let request = CallbackRequestRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(request.notes.len(), 10);
    assert_eq!(request.request.status, "Contacted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_groups_notes_by_request(pool: PgPool) {
    let first = new_request(&pool, "First").await;
    let second = new_request(&pool, "Second").await;
    CallbackRequestRepo::add_note(&pool, first, "left voicemail").await.unwrap();

    let list = CallbackRequestRepo::list(&pool).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].request.id, second);
    assert!(list[0].notes.is_empty());
    assert_eq!(list[1].request.id, first);
    assert_eq!(list[1].notes.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_notes(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;
    CallbackRequestRepo::add_note(&pool, id, "called back").await.unwrap();

    assert!(CallbackRequestRepo::delete(&pool, id).await.unwrap());
    assert!(!CallbackRequestRepo::delete(&pool, id).await.unwrap());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM callback_request_notes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// A note is stamped when it is appended, after waiting for the row lock.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_note_time_follows_lock_wait(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let mut holder = pool.begin().await.unwrap();
    sqlx::query("SELECT id FROM callback_requests WHERE id = $1 FOR UPDATE")
        .bind(id)
        .execute(&mut *holder)
        .await
        .unwrap();

    let waiter = {
        let pool = pool.clone();
        tokio::spawn(async move { CallbackRequestRepo::add_note(&pool, id, "after wait").await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let (released_at,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("SELECT clock_timestamp()")
            .fetch_one(&mut *holder)
            .await
            .unwrap();
    holder.commit().await.unwrap();

    let request = waiter.await.unwrap().unwrap().unwrap();
    assert_eq!(request.notes.len(), 1);
    assert!(
        request.notes[0].created_at >= released_at,
        "note stamped {} before the lock was released at {released_at}",
        request.notes[0].created_at
    );
}

/// Concurrent appends get timestamps in the order they were written.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_note_times_match_append_order(pool: PgPool) {
    let id = new_request(&pool, "Rahim").await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pool = pool.clone();
            tokio::spawn(async move {
                CallbackRequestRepo::add_note(&pool, id, &format!("note {i}")).await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap().unwrap();
    }

    let request = CallbackRequestRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    let ids: Vec<i64> = request.notes.iter().map(|n| n.id).collect();
    let mut expected = ids.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, expected, "newest-first by time must match append order");
}
