//! Shared test utilities for daylog-db unit tests.

pub(crate) mod helpers {
    use daylog_core::entities::{EntryType, EntryWithType};
    use daylog_core::enums::Difficulty;
    use daylog_core::inputs::EntryInput;
    use daylog_core::time::parse_entry_date;

    use crate::service::DaylogService;

    /// Create an in-memory DaylogService.
    pub async fn test_service() -> DaylogService {
        DaylogService::new_local(":memory:").await.unwrap()
    }

    /// Create an entry type and return it.
    pub async fn create_test_type(svc: &DaylogService, name: &str) -> EntryType {
        svc.create_entry_type(name).await.unwrap()
    }

    /// Create an entry on `date` (`YYYY-MM-DD`) with the given difficulty.
    pub async fn create_test_entry(
        svc: &DaylogService,
        type_id: &str,
        date: &str,
        difficulty: Difficulty,
    ) -> EntryWithType {
        let input = EntryInput::new(parse_entry_date(date).unwrap(), type_id).difficulty(difficulty);
        svc.create_entry(&input).await.unwrap()
    }
}
