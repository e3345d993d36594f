//! Admin role-marker and session models.

use landmark_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `admin_role_grants` table. Its existence grants the admin
/// role to `subject`.
#[derive(Debug, Clone, FromRow)]
pub struct AdminRoleGrant {
    pub id: DbId,
    pub subject: String,
    pub granted_at: Timestamp,
}

/// A row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub subject: String,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording an issued session token.
pub struct CreateAdminSession {
    pub subject: String,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
}
