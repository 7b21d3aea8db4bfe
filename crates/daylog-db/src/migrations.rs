//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. Every step is safe to re-run.

use daylog_core::inputs::fold_type_name;

use crate::DaylogDb;
use crate::error::DatabaseError;

/// Initial schema: 3 tables, 5 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl DaylogDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.migrate_folded_type_names().await
    }

    /// 002: `entry_types.name_folded` holds the Unicode-lowercased name the
    /// type filter matches against. SQLite's `lower()` folds ASCII only.
    async fn migrate_folded_type_names(&self) -> Result<(), DatabaseError> {
        let migration_err =
            |e: libsql::Error| DatabaseError::Migration(format!("002_name_folded: {e}"));

        let mut rows = self
            .conn
            .query(
                "SELECT 1 FROM pragma_table_info('entry_types') WHERE name = 'name_folded'",
                (),
            )
            .await
            .map_err(migration_err)?;
        let has_column = rows.next().await.map_err(migration_err)?.is_some();
        drop(rows);

        if !has_column {
            self.conn
                .execute("ALTER TABLE entry_types ADD COLUMN name_folded TEXT", ())
                .await
                .map_err(migration_err)?;
        }

        let mut rows = self
            .conn
            .query("SELECT id, name FROM entry_types WHERE name_folded IS NULL", ())
            .await
            .map_err(migration_err)?;
        let mut pending: Vec<(String, String)> = Vec::new();
        while let Some(row) = rows.next().await.map_err(migration_err)? {
            pending.push((row.get(0)?, row.get(1)?));
        }
        drop(rows);

        for (id, name) in &pending {
            self.conn
                .execute(
                    "UPDATE entry_types SET name_folded = ?1 WHERE id = ?2",
                    libsql::params![fold_type_name(name), id.as_str()],
                )
                .await
                .map_err(migration_err)?;
        }
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), "backfilled folded type names");
        }
        Ok(())
    }
}
