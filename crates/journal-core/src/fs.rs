//! Filesystem utilities for atomic file replacement.
//!
//! The backing store is rewritten in full on every save. A naive truncate
//! risks a torn file on crash mid-write, so saves go through a temp file in
//! the same directory followed by a rename.

use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;

/// Write `contents` to `path` atomically.
///
/// The bytes are written to a temp file next to `path` and then moved into
/// place, so readers never observe a partially written file.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("journal");
    let temp_path = path.with_file_name(format!(".{}.tmp-{}", file_name, std::process::id()));

    let mut file = fs::File::create(&temp_path)?;
    if let Err(err) = file.write_all(contents).and_then(|()| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    rename_with_fallback(&temp_path, path)
}

/// Atomically rename a file, with fallback for platforms where rename fails
/// if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists. This function handles that case by removing
/// the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            // Clean up the temp file on failure
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
