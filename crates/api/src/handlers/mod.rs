//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `landmark_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod callback_request;
pub mod contact_message;
pub mod project;
pub mod site_settings;
