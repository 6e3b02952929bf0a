// Store module: the flat user store is a single JSON array file.
// Saving is read-modify-write of the whole file. There is no locking and
// the write is not atomic, so concurrent runs can lose records.

use crate::record::UserRecord;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Append `user` to the array stored at `path`, creating the file if needed.
///
/// Existing entries are kept as-is, whatever their shape. If the file
/// holds invalid JSON or a non-array value, its content is dropped and a
/// warning is logged; the new file then contains only `user`.
pub fn save_user(user: &UserRecord, path: &Path) -> Result<()> {
    let entries = read_entries(path)?;
    let count = append_entry(entries, user, path)?;
    tracing::info!(path = %path.display(), count, "user appended to store");
    Ok(())
}

/// Push `user` onto `entries` and overwrite `path` with the whole array.
/// Returns the number of entries written. Object keys keep their order.
pub fn append_entry(mut entries: Vec<Value>, user: &UserRecord, path: &Path) -> Result<usize> {
    entries.push(serde_json::to_value(user).context("Failed to serialize user record")?);

    let body = serde_json::to_string_pretty(&entries).context("Failed to serialize user store")?;
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(entries.len())
}

/// Read every record in the store. A missing file is an empty store;
/// unlike `save_user`, unreadable content is an error here.
pub fn load_users(path: &Path) -> Result<Vec<UserRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let users = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing user store {}", path.display()))?;
    Ok(users)
}

/// Current array content, or an empty list for a missing/corrupt file.
/// Discarded content is reported with a warning.
pub fn read_entries(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store unreadable, starting empty");
            return Ok(Vec::new());
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => Ok(entries),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "store is not a JSON array, discarding content");
            Ok(Vec::new())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store is not valid JSON, discarding content");
            Ok(Vec::new())
        }
    }
}
