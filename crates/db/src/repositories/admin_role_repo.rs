//! Repository for the `admin_role_grants` role-marker table.

use sqlx::PgPool;

use crate::models::admin::AdminRoleGrant;

/// Grants and checks the admin role marker.
pub struct AdminRoleRepo;

impl AdminRoleRepo {
    /// Ensure a grant exists for `subject`, refreshing `granted_at`.
    ///
    /// Idempotent; safe to call on every successful login.
    pub async fn grant(pool: &PgPool, subject: &str) -> Result<AdminRoleGrant, sqlx::Error> {
        sqlx::query_as::<_, AdminRoleGrant>(
            "INSERT INTO admin_role_grants (subject)
             VALUES ($1)
             ON CONFLICT (subject) DO UPDATE SET granted_at = NOW()
             RETURNING id, subject, granted_at",
        )
        .bind(subject)
        .fetch_one(pool)
        .await
    }

    /// Whether `subject` currently holds the admin role.
    pub async fn is_granted(pool: &PgPool, subject: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM admin_role_grants WHERE subject = $1)",
        )
        .bind(subject)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Remove the grant for `subject`. Returns `true` if a row was removed.
    pub async fn revoke(pool: &PgPool, subject: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_role_grants WHERE subject = $1")
            .bind(subject)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
