//! Credential Store
//! Mission: Store provisioned credentials and answer exact-match lookups with SQLite

use crate::auth::digest::digest;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Credential store with SQLite backend.
///
/// Read-only from the auth core's perspective: records are seeded at
/// provisioning time and never mutated by any request path.
pub struct UserStore {
    db_path: String,
}

impl UserStore {
    /// Open (creating if needed) the store and seed default users when empty.
    pub fn new(db_path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data dir {}", parent.display()))?;
            }
        }

        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_digest TEXT NOT NULL,
                role TEXT NOT NULL
            )",
            [],
        )?;

        self.seed_default_users(&conn)?;

        Ok(())
    }

    /// Seed the provisioning fixtures on first start.
    fn seed_default_users(&self, conn: &Connection) -> Result<()> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .context("Failed to count users")?;

        if count > 0 {
            return Ok(());
        }

        let seeds = [
            ("admin", "admin123", "admin"),
            ("user", "user123", "user"),
            ("guest", "guest123", "guest"),
        ];

        for (username, password, role) in seeds {
            conn.execute(
                "INSERT INTO users (username, password_digest, role) VALUES (?1, ?2, ?3)",
                params![username, digest(password), role],
            )
            .with_context(|| format!("Failed to seed user {}", username))?;
        }

        info!("🔐 Seeded default users (admin/user/guest)");
        warn!("⚠️  CHANGE DEFAULT PASSWORDS IN PRODUCTION!");

        Ok(())
    }

    /// Return the role iff a record matches username AND digest.
    ///
    /// A single predicate on purpose: the caller cannot distinguish an
    /// unknown user from a wrong password (enumeration resistance).
    pub fn lookup(&self, username: &str, password_digest: &str) -> Result<Option<String>> {
        let conn = Connection::open(&self.db_path)?;

        let role = conn
            .query_row(
                "SELECT role FROM users WHERE username = ?1 AND password_digest = ?2",
                params![username, password_digest],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .context("Credential lookup failed")?;

        Ok(role)
    }

    /// Provision a new credential record. Used by seeding and tests; there
    /// is no password-change flow, records are immutable once created.
    pub fn create_user(&self, username: &str, password: &str, role: &str) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "INSERT INTO users (username, password_digest, role) VALUES (?1, ?2, ?3)",
            params![username, digest(password), role],
        )
        .with_context(|| format!("Failed to insert user {}", username))?;

        info!("✅ Provisioned user: {} ({})", username, role);

        Ok(())
    }
}
