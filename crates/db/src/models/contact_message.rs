//! Contact message (visitor inquiry) model and DTOs.

use landmark_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_messages` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number seems too short"))]
    pub phone: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}
