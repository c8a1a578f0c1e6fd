//! Entry data model and validation.
//!
//! A `JournalEntry` is immutable after construction: there is no update
//! operation, so the length invariants are enforced once, when an entry is
//! built or deserialized from disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JournalError, Result};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 50;

/// Maximum content length, in characters.
pub const MAX_CONTENT_LEN: usize = 200;

/// A single journaled note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Title, at most [`MAX_TITLE_LEN`] characters
    pub title: String,

    /// Body text, at most [`MAX_CONTENT_LEN`] characters
    pub content: String,

    /// Creation timestamp, serialized as RFC 3339
    pub date: DateTime<Utc>,

    /// Tags, trimmed and non-empty; insertion order kept, duplicates kept
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Build a validated entry with the given identity and timestamp.
    ///
    /// Tags are trimmed of surrounding whitespace; tags that are empty after
    /// trimming are dropped. Duplicates are kept as given.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if `title` exceeds
    /// [`MAX_TITLE_LEN`] or `content` exceeds [`MAX_CONTENT_LEN`] characters.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        content: impl Into<String>,
        date: DateTime<Utc>,
        tags: &[String],
    ) -> Result<Self> {
        let entry = Self {
            id,
            title: title.into(),
            content: content.into(),
            date,
            tags: normalize_tags(tags),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Re-check the length invariants.
    ///
    /// Used on records deserialized from disk, which bypass [`Self::new`].
    pub fn validate(&self) -> Result<()> {
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(JournalError::Validation(format!(
                "Title cannot exceed {} characters.",
                MAX_TITLE_LEN
            )));
        }
        if self.content.chars().count() > MAX_CONTENT_LEN {
            return Err(JournalError::Validation(format!(
                "Content cannot exceed {} characters.",
                MAX_CONTENT_LEN
            )));
        }
        Ok(())
    }
}

/// Trim tags and drop those that are empty after trimming.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
