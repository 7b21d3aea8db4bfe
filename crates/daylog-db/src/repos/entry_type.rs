//! Entry type repository: list and create.

use daylog_core::entities::EntryType;
use daylog_core::ids::PREFIX_ENTRY_TYPE;
use daylog_core::inputs::{fold_type_name, normalize_type_name};
use daylog_core::time::{format_timestamp, now};

use crate::error::{DatabaseError, is_unique_violation};
use crate::helpers::{ENTRY_TYPE_COLS, row_to_entry_type};
use crate::service::DaylogService;

pub const MSG_TYPE_EXISTS: &str = "Type name already exists";

impl DaylogService {
    /// All entry types, alphabetical by name.
    pub async fn list_entry_types(&self) -> Result<Vec<EntryType>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ENTRY_TYPE_COLS} FROM entry_types t ORDER BY t.name ASC"),
                (),
            )
            .await?;

        let mut types = Vec::new();
        while let Some(row) = rows.next().await? {
            types.push(row_to_entry_type(&row, 0)?);
        }
        Ok(types)
    }

    /// Create a type with a trimmed, unique name.
    ///
    /// Names compare exactly as stored, so `Meeting` and `meeting` may
    /// coexist.
    pub async fn create_entry_type(&self, name: &str) -> Result<EntryType, DatabaseError> {
        let name = normalize_type_name(name)?;
        let created_at = now();
        let id = self.db().generate_id(PREFIX_ENTRY_TYPE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO entry_types (id, name, name_folded, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    name.as_str(),
                    fold_type_name(&name),
                    format_timestamp(&created_at)
                ],
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e, "entry_types.name") {
                    DatabaseError::Conflict(MSG_TYPE_EXISTS.into())
                } else {
                    DatabaseError::LibSql(e)
                }
            })?;

        tracing::debug!(%id, %name, "entry type created");
        Ok(EntryType {
            id,
            name,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_entry_type_roundtrip() {
        let svc = test_service().await;

        let created = svc.create_entry_type("Meeting").await.unwrap();
        assert!(created.id.starts_with("typ-"));
        assert_eq!(created.name, "Meeting");

        let all = svc.list_entry_types().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn create_entry_type_trims_name() {
        let svc = test_service().await;
        let created = svc.create_entry_type("  Task \n").await.unwrap();
        assert_eq!(created.name, "Task");
    }

    #[tokio::test]
    async fn blank_name_is_validation_error() {
        let svc = test_service().await;
        let result = svc.create_entry_type("   ").await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert!(svc.list_entry_types().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let svc = test_service().await;
        let original = svc.create_entry_type("Meeting").await.unwrap();

        let result = svc.create_entry_type("Meeting").await;
        assert!(
            matches!(result, Err(DatabaseError::Conflict(ref msg)) if msg == MSG_TYPE_EXISTS),
            "expected conflict, got {result:?}"
        );

        // Trimmed duplicates collide too
        let result = svc.create_entry_type(" Meeting ").await;
        assert!(matches!(result, Err(DatabaseError::Conflict(_))));

        assert_eq!(svc.list_entry_types().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let svc = test_service().await;
        svc.create_entry_type("Meeting").await.unwrap();
        svc.create_entry_type("meeting").await.unwrap();
        assert_eq!(svc.list_entry_types().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_is_alphabetical() {
        let svc = test_service().await;
        for name in ["Task", "Meeting", "Note"] {
            svc.create_entry_type(name).await.unwrap();
        }

        let names: Vec<String> = svc
            .list_entry_types()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["Meeting", "Note", "Task"]);
    }
}
