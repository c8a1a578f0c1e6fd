//! Whole-file JSON persistence and CRUD primitives.
//!
//! `EntryStore` owns the backing file: a single JSON array of entries in
//! insertion order. Every mutating operation reloads the collection from
//! disk, applies the change, and rewrites the whole file atomically; no
//! in-memory cache survives between calls, so a single-process caller
//! always observes its own latest write.
//!
//! There is no locking against concurrent processes: two simultaneous
//! load-modify-save cycles race with last-save-wins semantics. The tool is
//! scoped to a single user on a single machine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::entry::JournalEntry;
use crate::error::{JournalError, Result};
use crate::fs::write_atomic;

/// File-backed store for the full entry collection.
///
/// Constructed explicitly with a path and passed by reference into the
/// command layer; there is no global store handle.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store bound to the given backing file.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection, surfacing corruption explicitly.
    ///
    /// A missing or empty file reads as an empty collection. A file that is
    /// not a parseable JSON entry array yields `JournalError::Malformed`,
    /// and any record violating a length invariant yields
    /// `JournalError::Validation`, so callers choose the handling policy.
    pub fn try_load(&self) -> Result<Vec<JournalEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<JournalEntry> = serde_json::from_str(&raw)
            .map_err(|err| JournalError::Malformed(err.to_string()))?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(entries)
    }

    /// Load the full collection, degrading corruption to "no entries".
    ///
    /// Lossy wrapper over [`Self::try_load`]: a malformed file becomes an
    /// empty collection. Validation errors still propagate.
    pub fn load(&self) -> Result<Vec<JournalEntry>> {
        match self.try_load() {
            Err(JournalError::Malformed(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Serialize the full sequence in order and replace the backing file.
    ///
    /// The write is atomic (temp file plus rename); no partial file is ever
    /// visible to subsequent reads.
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }

    /// Create a new entry and persist the extended collection.
    ///
    /// The entry gets a fresh v4 UUID, retried until it is unique within
    /// the loaded collection, and the current timestamp. Tags are trimmed;
    /// empty tags are dropped.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if `title` or `content` exceed
    /// their length limits; nothing is persisted in that case.
    pub fn add(&self, title: &str, content: &str, tags: &[String]) -> Result<JournalEntry> {
        let mut entries = self.load()?;

        let id = unique_id(&entries);
        let entry = JournalEntry::new(id, title, content, Utc::now(), tags)?;

        entries.push(entry.clone());
        self.save(&entries)?;
        Ok(entry)
    }

    /// Remove the entry with the given id and persist the remainder.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if no entry has that id; the
    /// collection is left unchanged.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.load()?;

        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(JournalError::NotFound(id));
        }

        self.save(&entries)?;
        Ok(())
    }
}

/// Generate a v4 UUID not already present in the collection.
fn unique_id(entries: &[JournalEntry]) -> Uuid {
    let mut id = Uuid::new_v4();
    while entries.iter().any(|entry| entry.id == id) {
        id = Uuid::new_v4();
    }
    id
}
