//! Service Configuration
//! Mission: Build one explicit config struct from the environment at startup

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-in-production-minimum-32-characters";

/// Process-wide configuration, constructed once in `main` and injected into
/// the auth components. Core logic never reads the environment itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// SQLite credential store location.
    pub db_path: String,
    /// Symmetric signing secret shared only by this service.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let db_path = env::var("AUTH_DB_PATH").unwrap_or_else(|_| "data/auth.db".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("⚠️  JWT_SECRET not set, using dev default — do not ship this");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|&v| v > 0)
                .context("TOKEN_TTL_SECS must be a positive integer")?,
            Err(_) => 3_600,
        };

        Ok(Self {
            bind_addr,
            db_path,
            jwt_secret,
            token_ttl_secs,
        })
    }
}
