//! Authentication primitives.
//!
//! - [`pin`] -- Argon2id hashing and verification of the admin PIN.
//! - [`jwt`] -- Session-token generation, validation, and hashing.
//! - [`cookie`] -- Reading and writing the `httpOnly` session cookie.
//! - [`session`] -- Server-side session checks shared by extractors and handlers.

pub mod cookie;
pub mod jwt;
pub mod pin;
pub mod session;
