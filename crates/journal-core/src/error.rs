//! Error types for Journal core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Data validation error (title/content length limit exceeded)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entry not found by ID
    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    /// Backing file exists but is not a parseable entry collection
    #[error("Malformed journal file: {0}")]
    Malformed(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
