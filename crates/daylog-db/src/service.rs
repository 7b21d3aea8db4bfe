//! Service layer over the database handle.
//!
//! `DaylogService` wraps `DaylogDb` (raw database access). All repo methods
//! are implemented as `impl DaylogService` blocks in `crate::repos`.

use crate::DaylogDb;
use crate::error::DatabaseError;

/// Entry point for every entry-type, entry, and vocabulary operation.
///
/// Each method is one short unit of work: validation first, then a single
/// SQL statement for the write, then (for writes that return joined data)
/// one read. No retries; failures surface to the caller immediately.
pub struct DaylogService {
    db: DaylogDb,
}

impl DaylogService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = DaylogDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `DaylogDb`.
    #[must_use]
    pub const fn from_db(db: DaylogDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &DaylogDb {
        &self.db
    }
}
