//! ID prefixes for generated entity identifiers.
//!
//! IDs are formatted as `{prefix}-{16 hex chars}`, e.g. `ent-a3f8b2c1d4e5f607`.

pub const PREFIX_ENTRY_TYPE: &str = "typ";
pub const PREFIX_ENTRY: &str = "ent";
pub const PREFIX_VOCABULARY: &str = "voc";

/// Every prefix in use, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_ENTRY_TYPE, PREFIX_ENTRY, PREFIX_VOCABULARY];
