//! package.json description update

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ScaffoldError;

/// Overwrite the manifest's `description`, leaving every other key (and the
/// key order) as it was. Output uses 2-space indentation.
///
/// Number literals keep their text. String escapes are normalized on the way
/// through, so `"\u00e9"` is written back as `"é"`.
pub fn update_description(path: &Path, description: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .map_err(|e| ScaffoldError::manifest(path, format!("cannot read file ({})", e)))?;

    let updated =
        set_description(&content, description).map_err(|msg| ScaffoldError::manifest(path, msg))?;

    fs::write(path, updated)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    Ok(())
}

/// Pure part of [`update_description`]: JSON text in, JSON text out
pub fn set_description(content: &str, description: &str) -> std::result::Result<String, String> {
    let mut manifest: Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

    let object = manifest
        .as_object_mut()
        .ok_or_else(|| "top-level value must be an object".to_string())?;
    object.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );

    let mut out = serde_json::to_string_pretty(&manifest)
        .map_err(|e| format!("cannot serialize: {}", e))?;
    out.push('\n');
    Ok(out)
}
