//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the session holder from a Bearer token or the session cookie.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
