//! SQLite database - schema definitions and connection management
//!
//! This file contains:
//! - Database struct definition
//! - Connection management (new, new_in_memory, init)
//! - Schema creation
//!
//! Table operations live in the tables/ subdirectory.

use parking_lot::Mutex;
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;

/// Database wrapper serializing access to a single connection
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a database file and initialize schema
    pub fn new(database_url: &str) -> SqliteResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create database directory {:?}: {}", parent, e);
                }
            }
        }

        let conn = Connection::open(database_url)?;
        Self::with_connection(conn)
    }

    /// Private in-memory database, used by tests and dry runs
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> SqliteResult<Self> {
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> SqliteResult<()> {
        let conn = self.conn.lock();

        // User documents. `protected` holds one JSON object per service with
        // the oauthtoken / oauthexpiredate / oauthrefreshtoken / oauthvalid keys.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                protected TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        // Token table backing the external SQLite token store
        conn.execute(
            "CREATE TABLE IF NOT EXISTS oauth_tokens (
                user_id TEXT NOT NULL,
                service TEXT NOT NULL,
                access_token TEXT NOT NULL DEFAULT '',
                access_token_expiry TEXT,
                refresh_token TEXT NOT NULL DEFAULT '',
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, service)
            )",
            [],
        )?;

        Ok(())
    }
}
