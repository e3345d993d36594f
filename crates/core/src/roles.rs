//! Well-known role name and subject constants.
//!
//! The back-office has a single privileged identity. Its role is granted by
//! the existence of an `admin_role_grants` row keyed by [`ADMIN_SUBJECT`].

pub const ROLE_ADMIN: &str = "admin";

/// Stable identifier of the one admin identity. Used as the JWT subject and
/// as the key of the role-marker record.
pub const ADMIN_SUBJECT: &str = "site-admin";
