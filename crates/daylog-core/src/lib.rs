//! # daylog-core
//!
//! Core types, ID prefixes, and validation for daylog.
//!
//! This crate provides the foundational types shared across all daylog crates:
//! - Entity structs for entry types, entries, and vocabulary
//! - The `Difficulty` enum
//! - ID prefix constants
//! - Request input parsing and normalisation
//! - Entry list filters and grouping
//! - HTTP response envelopes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod grouping;
pub mod ids;
pub mod inputs;
pub mod responses;
pub mod time;
