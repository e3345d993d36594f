//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Where the entity is mutable, an update DTO (all `Option` fields)

pub mod admin;
pub mod callback_request;
pub mod contact_message;
pub mod project;
pub mod site_settings;
