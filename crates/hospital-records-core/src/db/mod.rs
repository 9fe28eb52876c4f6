//! Database layer for hospital records.

mod collections;
mod schema;

pub use collections::*;
pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Failures reading or writing a stored collection.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Collection is not valid JSON for its type: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// Wait this long on a locked file before reporting `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite file holding one JSON document per collection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the records file at `path`, creating it and the schema if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Private in-memory database; contents vanish on drop.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> DbResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_has_no_collections() {
        let db = Database::open_in_memory().unwrap();
        assert!(!db.contains(CollectionKey::Patients).unwrap());
        assert!(!db.contains(CollectionKey::Staff).unwrap());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"collections".to_string()));
    }

    #[test]
    fn test_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");

        {
            let db = Database::open(&path).unwrap();
            db.store(CollectionKey::AdminPassword, "admin").unwrap();
        }

        let db = Database::open(&path).unwrap();
        let pass: Option<String> = db.load(CollectionKey::AdminPassword).unwrap();
        assert_eq!(pass.as_deref(), Some("admin"));
    }
}
