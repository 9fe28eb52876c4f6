//! Whole-collection key/value operations.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Database, DbResult};

/// Persisted collection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Patients,
    Staff,
    Appointments,
    Invoices,
    Labs,
    Inventory,
    Notifications,
    AdminProfile,
    AdminPassword,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 9] = [
        CollectionKey::Patients,
        CollectionKey::Staff,
        CollectionKey::Appointments,
        CollectionKey::Invoices,
        CollectionKey::Labs,
        CollectionKey::Inventory,
        CollectionKey::Notifications,
        CollectionKey::AdminProfile,
        CollectionKey::AdminPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Patients => "patients",
            CollectionKey::Staff => "staff",
            CollectionKey::Appointments => "appointments",
            CollectionKey::Invoices => "invoices",
            CollectionKey::Labs => "labs",
            CollectionKey::Inventory => "inventory",
            CollectionKey::Notifications => "notifications",
            CollectionKey::AdminProfile => "admin_profile",
            CollectionKey::AdminPassword => "admin_pass",
        }
    }
}

impl Database {
    /// Load and decode the document stored under `key`, if present.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> DbResult<Option<T>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?",
                [key.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Replace the document stored under `key`.
    pub fn store<T: Serialize + ?Sized>(&self, key: CollectionKey, value: &T) -> DbResult<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            r#"
            INSERT INTO collections (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key.as_str(), json],
        )?;
        tracing::debug!(key = key.as_str(), bytes = json.len(), "collection written");
        Ok(())
    }

    /// Check whether a document exists under `key`.
    pub fn contains(&self, key: CollectionKey) -> DbResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM collections WHERE key = ?",
            [key.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Run `writes` in one transaction; any error rolls all of them back.
    pub fn atomically<T, F>(&self, writes: F) -> DbResult<T>
    where
        F: FnOnce(&Self) -> DbResult<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let out = writes(self)?;
        tx.commit()?;
        Ok(out)
    }

    #[cfg(test)]
    pub(crate) fn remove(&self, key: CollectionKey) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM collections WHERE key = ?", [key.as_str()])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_missing_key_loads_none() {
        let db = setup_db();
        let loaded: Option<Vec<String>> = db.load(CollectionKey::Patients).unwrap();
        assert!(loaded.is_none());
        assert!(!db.contains(CollectionKey::Patients).unwrap());
    }

    #[test]
    fn test_store_and_load() {
        let db = setup_db();
        let items = vec!["Consultation".to_string(), "Lab Test".to_string()];

        db.store(CollectionKey::Invoices, &items).unwrap();

        let loaded: Vec<String> = db.load(CollectionKey::Invoices).unwrap().unwrap();
        assert_eq!(loaded, items);
        assert!(db.contains(CollectionKey::Invoices).unwrap());
    }

    #[test]
    fn test_store_overwrites() {
        let db = setup_db();
        db.store(CollectionKey::AdminPassword, "admin").unwrap();
        db.store(CollectionKey::AdminPassword, "s3cret").unwrap();

        let loaded: String = db.load(CollectionKey::AdminPassword).unwrap().unwrap();
        assert_eq!(loaded, "s3cret");
    }

    #[test]
    fn test_remove() {
        let db = setup_db();
        db.store(CollectionKey::Notifications, &Vec::<String>::new())
            .unwrap();

        assert!(db.remove(CollectionKey::Notifications).unwrap());
        assert!(!db.remove(CollectionKey::Notifications).unwrap());
    }

    #[test]
    fn test_atomically_rolls_back_on_error() {
        let db = setup_db();
        db.store(CollectionKey::AdminPassword, "admin").unwrap();

        let result: DbResult<()> = db.atomically(|db| {
            db.store(CollectionKey::AdminPassword, "half-done")?;
            db.store(CollectionKey::AdminProfile, "ignored")?;
            Err(serde_json::from_str::<u32>("nope").unwrap_err().into())
        });

        assert!(matches!(result, Err(DbError::Json(_))));
        let pass: String = db.load(CollectionKey::AdminPassword).unwrap().unwrap();
        assert_eq!(pass, "admin");
        assert!(!db.contains(CollectionKey::AdminProfile).unwrap());
    }

    #[test]
    fn test_atomically_commits() {
        let db = setup_db();
        db.atomically(|db| {
            db.store(CollectionKey::AdminPassword, "one")?;
            db.store(CollectionKey::AdminProfile, "two")
        })
        .unwrap();

        assert!(db.contains(CollectionKey::AdminPassword).unwrap());
        assert!(db.contains(CollectionKey::AdminProfile).unwrap());
    }

    #[test]
    fn test_shape_mismatch_is_json_error() {
        let db = setup_db();
        db.store(CollectionKey::Staff, &42).unwrap();

        let result: DbResult<Option<Vec<String>>> = db.load(CollectionKey::Staff);
        assert!(matches!(result, Err(DbError::Json(_))));
    }

    #[test]
    fn test_key_names() {
        let names: Vec<&str> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "patients",
                "staff",
                "appointments",
                "invoices",
                "labs",
                "inventory",
                "notifications",
                "admin_profile",
                "admin_pass"
            ]
        );
    }
}
