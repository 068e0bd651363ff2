//! Precondition check: the target directory must be empty

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ScaffoldError;

/// How many offending entries the error lists
const MAX_LISTED_ENTRIES: usize = 10;

/// Fail unless `dir` exists and has no entries at all (hidden ones included)
pub fn ensure_empty(dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    if entries.is_empty() {
        return Ok(());
    }

    entries.sort();
    entries.truncate(MAX_LISTED_ENTRIES);
    Err(ScaffoldError::directory_not_empty(dir, entries).into())
}
