use super::error::StoreResult;
use super::migrations::init_with_migrations;
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timestamp layout shared with SQLite's `strftime('%Y-%m-%d %H:%M:%f')`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at `path` and brings its schema up to date.
    ///
    /// Creates the parent directory and the file when absent. Called once at
    /// startup; any error here must stop the server before it binds.
    pub fn new(path: &Path) -> Result<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a short-lived handle for one store operation, without migrating.
    pub fn open(path: &Path) -> StoreResult<Db> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(Db { conn })
    }

    /// Opens the database without applying migrations, creating the file if needed.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}

/// Current UTC time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
