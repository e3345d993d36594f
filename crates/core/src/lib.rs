//! Domain logic for the Landmark back-office.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! executes the plans computed here and the `api` crate maps the errors.

pub mod callback;
pub mod error;
pub mod featured;
pub mod listing;
pub mod pin;
pub mod roles;
pub mod types;
pub mod validation;
