//! # Journal Core
//!
//! Core library for Journal - a small, file-backed, CLI-first personal journal.
//!
//! This crate provides the entry store and query engine independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: Entry data model and validation
//! - **store**: Whole-file JSON persistence and CRUD primitives
//! - **query**: Tag filtering, title search, fuzzy matching, statistics
//! - **fs**: Atomic file replacement helpers

pub mod entry;
pub mod error;
pub mod fs;
pub mod query;
pub mod store;

pub use entry::{JournalEntry, MAX_CONTENT_LEN, MAX_TITLE_LEN};
pub use error::{JournalError, Result};
pub use store::EntryStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
