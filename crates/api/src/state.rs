use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted and the config
/// sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: landmark_db::DbPool,
    /// Server configuration (session secrets, PIN hash, cookie flags).
    pub config: Arc<ServerConfig>,
}
