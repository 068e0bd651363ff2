//! Validation of operator-supplied values
//!
//! Names end up in directory names and file contents, so they must not
//! contain path separators or placeholder delimiters.

use anyhow::Result;

use crate::error::ScaffoldError;

/// Validate a value that will be substituted into paths
pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::missing_input(
            field,
            format!("Pass --{} or answer the prompt with a non-empty value", field),
        )
        .into());
    }

    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(ScaffoldError::config_error_with_hint(
            format!("{} '{}' is not a valid directory name", field, value),
            "Use letters, digits, hyphens or underscores, e.g. my-app",
        )
        .into());
    }

    if value.contains("{{") || value.contains("}}") {
        return Err(ScaffoldError::config_error_with_hint(
            format!("{} '{}' contains placeholder delimiters", field, value),
            "Values must not contain '{{' or '}}'",
        )
        .into());
    }

    Ok(())
}
