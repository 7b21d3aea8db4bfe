//! Entity structs for all daylog domain objects.
//!
//! Each base entity maps to one table (`entry_types`, `entries`,
//! `vocabulary`). The joined views (`EntryWithType`, `EntryDetail`,
//! `VocabularyWithEntry`) flatten the base row and nest the related records,
//! which is the JSON shape the browser UI reads.

mod entry;
mod entry_type;
mod vocabulary;

pub use entry::{Entry, EntryDetail, EntryWithType};
pub use entry_type::EntryType;
pub use vocabulary::{Vocabulary, VocabularyWithEntry};
