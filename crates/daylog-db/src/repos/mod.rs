//! Repository modules implementing CRUD operations for all daylog entities.
//!
//! Each module adds methods to `DaylogService` via `impl DaylogService` blocks.

pub mod entry;
pub mod entry_type;
pub mod vocabulary;
