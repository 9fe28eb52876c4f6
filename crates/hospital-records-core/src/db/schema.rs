//! SQLite schema definition.

/// Complete database schema for hospital records.
///
/// Every entity collection is stored whole, as one JSON document per key,
/// and rewritten on each mutation of that collection.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Collections (one JSON document per key)
-- ============================================================================

CREATE TABLE IF NOT EXISTS collections (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,                          -- JSON document
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Values must be well-formed JSON
CREATE TRIGGER IF NOT EXISTS collections_check_json BEFORE INSERT ON collections
BEGIN
    SELECT CASE
        WHEN json_valid(new.value) = 0 THEN
            RAISE(ABORT, 'Collection value must be valid JSON')
    END;
END;

CREATE TRIGGER IF NOT EXISTS collections_check_json_update BEFORE UPDATE ON collections
BEGIN
    SELECT CASE
        WHEN json_valid(new.value) = 0 THEN
            RAISE(ABORT, 'Collection value must be valid JSON')
    END;
END;
"#;
