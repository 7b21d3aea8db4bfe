//! Entry repository: filtered list, get, create, update, delete.

use daylog_core::entities::{EntryDetail, EntryWithType, Vocabulary};
use daylog_core::filter::EntryFilter;
use daylog_core::ids::PREFIX_ENTRY;
use daylog_core::inputs::{EntryInput, fold_type_name};
use daylog_core::time::{day_bounds, format_timestamp, now};

use crate::error::{DatabaseError, is_foreign_key_violation};
use crate::helpers::{
    ENTRY_COLS, ENTRY_TYPE_COLS, VOCABULARY_COLS, row_to_entry_with_type, row_to_vocabulary,
};
use crate::service::DaylogService;

const ENTITY: &str = "entry";

/// Entries joined with their type; append `WHERE`/`ORDER BY` as needed.
fn select_with_type() -> String {
    format!(
        "SELECT {ENTRY_COLS}, {ENTRY_TYPE_COLS} \
         FROM entries e \
         JOIN entry_types t ON t.id = e.type_id"
    )
}

/// Log the constraint failure, keep the libSQL error for the caller.
fn write_error(op: &str, e: libsql::Error) -> DatabaseError {
    if is_foreign_key_violation(&e) {
        tracing::warn!(op, error = %e, "entry references a missing type");
    }
    DatabaseError::LibSql(e)
}

impl DaylogService {
    /// Entries matching every set field of `filter`, newest date first.
    pub async fn list_entries(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<EntryWithType>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(day) = filter.date {
            let (start, end) = day_bounds(day);
            clauses.push(format!("e.date >= ?{idx} AND e.date < ?{}", idx + 1));
            params.push(format_timestamp(&start).into());
            params.push(format_timestamp(&end).into());
            idx += 2;
        }
        if let Some(ref type_name) = filter.type_name {
            clauses.push(format!("instr(t.name_folded, ?{idx}) > 0"));
            params.push(fold_type_name(type_name).into());
            idx += 1;
        }
        if let Some(difficulty) = filter.difficulty {
            clauses.push(format!("e.difficulty = ?{idx}"));
            params.push(difficulty.as_str().into());
        }

        let mut sql = select_with_type();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY e.date DESC, e.created_at DESC, e.rowid DESC");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry_with_type(&row, 0)?);
        }
        Ok(entries)
    }

    /// One entry joined with its type, without vocabulary.
    pub async fn get_entry_with_type(&self, id: &str) -> Result<EntryWithType, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{} WHERE e.id = ?1", select_with_type()), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(ENTITY, id))?;
        row_to_entry_with_type(&row, 0)
    }

    /// One entry joined with its type and its vocabulary (oldest first).
    pub async fn get_entry(&self, id: &str) -> Result<EntryDetail, DatabaseError> {
        let EntryWithType { entry, entry_type } = self.get_entry_with_type(id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {VOCABULARY_COLS} FROM vocabulary v \
                     WHERE v.entry_id = ?1 ORDER BY v.created_at ASC, v.rowid ASC"
                ),
                [id],
            )
            .await?;

        let mut vocabulary: Vec<Vocabulary> = Vec::new();
        while let Some(row) = rows.next().await? {
            vocabulary.push(row_to_vocabulary(&row, 0)?);
        }

        Ok(EntryDetail {
            entry,
            entry_type,
            vocabulary,
        })
    }

    /// Insert a new entry. A `type_id` with no matching type fails the
    /// foreign key and surfaces as `DatabaseError::LibSql`.
    pub async fn create_entry(&self, input: &EntryInput) -> Result<EntryWithType, DatabaseError> {
        let created_at = now();
        let id = self.db().generate_id(PREFIX_ENTRY).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO entries (id, date, type_id, notes, difficulty, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    format_timestamp(&input.date),
                    input.type_id.as_str(),
                    input.notes.as_deref(),
                    input.difficulty.as_str(),
                    format_timestamp(&created_at)
                ],
            )
            .await
            .map_err(|e| write_error("create", e))?;

        tracing::debug!(%id, type_id = %input.type_id, "entry created");
        self.get_entry_with_type(&id).await
    }

    /// Overwrite date, type, notes, and difficulty. `id` and `created_at`
    /// never change.
    pub async fn update_entry(
        &self,
        id: &str,
        input: &EntryInput,
    ) -> Result<EntryWithType, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE entries SET date = ?1, type_id = ?2, notes = ?3, difficulty = ?4
                 WHERE id = ?5",
                libsql::params![
                    format_timestamp(&input.date),
                    input.type_id.as_str(),
                    input.notes.as_deref(),
                    input.difficulty.as_str(),
                    id
                ],
            )
            .await
            .map_err(|e| write_error("update", e))?;

        if changed == 0 {
            return Err(DatabaseError::not_found(ENTITY, id));
        }

        tracing::debug!(%id, "entry updated");
        self.get_entry_with_type(id).await
    }

    /// Hard delete. The entry's vocabulary goes with it (`ON DELETE CASCADE`).
    pub async fn delete_entry(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM entries WHERE id = ?1", [id])
            .await?;

        if deleted == 0 {
            return Err(DatabaseError::not_found(ENTITY, id));
        }

        tracing::debug!(%id, "entry deleted");
        Ok(())
    }
}
