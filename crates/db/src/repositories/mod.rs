//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_role_repo;
pub mod admin_session_repo;
pub mod callback_request_repo;
pub mod contact_message_repo;
pub mod project_repo;
pub mod site_settings_repo;

pub use admin_role_repo::AdminRoleRepo;
pub use admin_session_repo::AdminSessionRepo;
pub use callback_request_repo::CallbackRequestRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use project_repo::ProjectRepo;
pub use site_settings_repo::SiteSettingsRepo;
