//! # daylog-db
//!
//! libSQL database operations for daylog.
//!
//! Holds all relational state: entry types, entries, and the vocabulary
//! captured with each entry. Uses the `libsql` crate in local (embedded)
//! mode; foreign keys are enforced and deleting an entry cascades to its
//! vocabulary.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// SQL expression for a fresh `{prefix}-{16 hex}` id, with the prefix bound
/// to `?1`.
pub(crate) const NEW_ID_SQL: &str = "?1 || '-' || lower(hex(randomblob(8)))";

/// Central database handle for all daylog state.
///
/// Wraps a libSQL database and a single connection shared by every request.
pub struct DaylogDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl DaylogDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let daylog_db = Self { db, conn };
        daylog_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(daylog_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ent-a3f8b2c1d4e5f607"`.
    ///
    /// Uses `randomblob(8)` in SQL to produce 16-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT {NEW_ID_SQL}"), [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Round-trip a trivial query to prove the connection is usable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> DaylogDb {
        DaylogDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["entry_types", "entries", "vocabulary"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("ent").await.unwrap();
        assert!(id.starts_with("ent-"), "ID should start with 'ent-': {id}");
        assert_eq!(
            id.len(),
            20,
            "ID should be 20 chars (3 prefix + 1 dash + 16 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in daylog_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn ping_succeeds() {
        test_db().await.ping().await.unwrap();
    }

    #[tokio::test]
    async fn entry_type_name_unique_constraint() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-1', 'Meeting', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-2', 'Meeting', '2024-01-01T00:00:00Z')",
                (),
            )
            .await;
        let err = result.expect_err("duplicate name should be rejected");
        assert!(
            error::is_unique_violation(&err, "entry_types.name"),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn id_collision_is_not_a_name_conflict() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-1', 'Meeting', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .unwrap();

        let err = db
            .conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-1', 'Task', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .expect_err("duplicate id should be rejected");
        assert!(!error::is_unique_violation(&err, "entry_types.name"), "unexpected error: {err}");
        assert!(error::is_unique_violation(&err, "entry_types.id"), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn migrations_backfill_folded_type_names() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-1', 'Übung', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .unwrap();
        db.run_migrations().await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT name_folded FROM entry_types WHERE id = 'typ-1'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "übung");
    }

    #[tokio::test]
    async fn entry_requires_existing_type() {
        let db = test_db().await;

        let err = db
            .conn()
            .execute(
                "INSERT INTO entries (id, date, type_id, created_at) VALUES ('ent-1', '2024-01-01T00:00:00Z', 'typ-missing', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .expect_err("dangling type_id should be rejected");
        assert!(error::is_foreign_key_violation(&err), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn difficulty_check_constraint() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO entry_types (id, name, created_at) VALUES ('typ-1', 'Note', '2024-01-01T00:00:00Z')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO entries (id, date, type_id, difficulty, created_at) VALUES ('ent-1', '2024-01-01T00:00:00Z', 'typ-1', 'Extreme', '2024-01-01T00:00:00Z')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown difficulty should be rejected");
    }
}
