//! Group an entry list by type name, as the storage view shows it.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EntryWithType;

/// All entries of one type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryGroup {
    pub type_name: String,
    pub entries: Vec<EntryWithType>,
}

/// Groups ordered by type name; each group keeps its input order.
#[must_use]
pub fn group_by_type(entries: Vec<EntryWithType>) -> Vec<EntryGroup> {
    let mut groups: BTreeMap<String, Vec<EntryWithType>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.entry_type.name.clone())
            .or_default()
            .push(entry);
    }
    groups
        .into_iter()
        .map(|(type_name, entries)| EntryGroup { type_name, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Entry, EntryType};
    use crate::enums::Difficulty;
    use crate::time::parse_entry_date;

    fn entry(id: &str, date: &str, type_name: &str) -> EntryWithType {
        let created_at = parse_entry_date("2024-01-01").unwrap();
        let type_id = format!("typ-{}", type_name.to_lowercase());
        EntryWithType {
            entry: Entry {
                id: id.into(),
                date: parse_entry_date(date).unwrap(),
                type_id: type_id.clone(),
                notes: None,
                difficulty: Difficulty::Medium,
                created_at,
            },
            entry_type: EntryType {
                id: type_id,
                name: type_name.into(),
                created_at,
            },
        }
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_type(Vec::new()).is_empty());
    }

    #[test]
    fn groups_sorted_by_name_and_keep_order() {
        let groups = group_by_type(vec![
            entry("ent-3", "2024-01-03", "Task"),
            entry("ent-2", "2024-01-02", "Meeting"),
            entry("ent-1", "2024-01-01", "Task"),
        ]);

        let names: Vec<&str> = groups.iter().map(|g| g.type_name.as_str()).collect();
        assert_eq!(names, ["Meeting", "Task"]);

        let task_ids: Vec<&str> = groups[1].entries.iter().map(|e| e.entry.id.as_str()).collect();
        assert_eq!(task_ids, ["ent-3", "ent-1"]);
    }
}
