//! Vocabulary repository: joined list and bulk insert for one entry.

use daylog_core::entities::VocabularyWithEntry;
use daylog_core::ids::PREFIX_VOCABULARY;
use daylog_core::inputs::{MSG_VOCABULARY_REQUIRED, VocabularyItem, retain_complete};
use daylog_core::time::{format_timestamp, now};

use crate::NEW_ID_SQL;
use crate::error::{DatabaseError, is_foreign_key_violation};
use crate::helpers::{
    ENTRY_COLS, ENTRY_TYPE_COLS, VOCABULARY_COLS, VOCABULARY_WIDTH, row_to_entry_with_type,
    row_to_vocabulary,
};
use crate::service::DaylogService;

impl DaylogService {
    /// Every vocabulary item with its entry and the entry's type, newest first.
    pub async fn list_vocabulary(&self) -> Result<Vec<VocabularyWithEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {VOCABULARY_COLS}, {ENTRY_COLS}, {ENTRY_TYPE_COLS}
                     FROM vocabulary v
                     JOIN entries e ON e.id = v.entry_id
                     JOIN entry_types t ON t.id = e.type_id
                     ORDER BY v.created_at DESC, v.rowid DESC"
                ),
                (),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(VocabularyWithEntry {
                vocabulary: row_to_vocabulary(&row, 0)?,
                entry: row_to_entry_with_type(&row, VOCABULARY_WIDTH)?,
            });
        }
        Ok(items)
    }

    /// Insert the complete items of `items` for `entry_id` and return how
    /// many rows were written.
    ///
    /// Items with a blank word or meaning are dropped; the rest are stored
    /// trimmed. The items travel as one JSON array expanded by `json_each`,
    /// so any batch size is a single statement with four bind variables:
    /// either every item is stored or none is. Ids are generated per row in
    /// SQL. An unknown `entry_id` fails the foreign key.
    pub async fn create_vocabulary_batch(
        &self,
        entry_id: &str,
        items: &[VocabularyItem],
    ) -> Result<u64, DatabaseError> {
        let entry_id = entry_id.trim();
        if entry_id.is_empty() {
            return Err(DatabaseError::Validation(MSG_VOCABULARY_REQUIRED.into()));
        }

        let complete = retain_complete(items);
        if complete.is_empty() {
            tracing::debug!(%entry_id, "no complete vocabulary items to insert");
            return Ok(0);
        }

        let payload =
            serde_json::to_string(&complete).map_err(|e| DatabaseError::Other(e.into()))?;

        let inserted = self
            .db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO vocabulary (id, word, meaning, entry_id, created_at)
                     SELECT {NEW_ID_SQL},
                            json_extract(j.value, '$.word'),
                            json_extract(j.value, '$.meaning'),
                            ?2, ?3
                     FROM json_each(?4) j
                     ORDER BY j.key"
                ),
                libsql::params![
                    PREFIX_VOCABULARY,
                    entry_id,
                    format_timestamp(&now()),
                    payload
                ],
            )
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    tracing::warn!(%entry_id, "vocabulary references a missing entry");
                }
                DatabaseError::LibSql(e)
            })?;

        tracing::debug!(%entry_id, count = inserted, "vocabulary inserted");
        Ok(inserted)
    }
}
