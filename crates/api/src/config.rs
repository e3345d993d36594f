use landmark_core::pin::is_well_formed;

use crate::auth::jwt::JwtConfig;
use crate::auth::pin::hash_pin;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Admin PIN and session cookie settings.
    pub admin: AdminConfig,
}

/// Admin login settings.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Argon2id PHC hash of the configured admin PIN.
    pub pin_hash: String,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AdminConfig {
    /// Load admin settings from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `ADMIN_PIN`     | **yes**  | --      |
    /// | `COOKIE_SECURE` | no       | `true`  |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PIN` is missing or not exactly four digits.
    pub fn from_env() -> Self {
        let pin = std::env::var("ADMIN_PIN").expect("ADMIN_PIN must be set in the environment");
        assert!(is_well_formed(&pin), "ADMIN_PIN must be exactly 4 digits");

        let pin_hash = hash_pin(&pin).expect("Failed to hash ADMIN_PIN");

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        Self {
            pin_hash,
            cookie_secure,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:9002`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`AdminConfig::from_env`] for the
    /// required secrets.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:9002".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let admin = AdminConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            admin,
        }
    }
}
