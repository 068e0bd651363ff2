//! Template fetch: clone, archive HEAD, unpack, drop the clone
//!
//! Only the files tracked at the template's HEAD land in the project; the
//! clone (and its `.git` directory) and the intermediate archive are removed.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::settings::TemplateSettings;
use crate::error::{hints, ScaffoldError};
use crate::exec::subprocess::{command_line, CommandRunner};
use crate::utils::paths::clone_dir_name;

/// Archive written by `git archive` inside the clone
pub const ARCHIVE_NAME: &str = "tmp.tar";

/// What the fetch produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Clone directory that was removed afterwards
    pub clone_dir: PathBuf,
    /// Number of archive entries unpacked into the project
    pub entries: usize,
}

/// Fetch the template's default branch into `root`.
///
/// A failure leaves whatever was already written in place.
pub fn fetch_template(
    runner: &dyn CommandRunner,
    template: &TemplateSettings,
    root: &Path,
) -> Result<FetchSummary> {
    let clone_name = clone_dir_name(&template.repository);
    if clone_name.is_empty() {
        return Err(ScaffoldError::config_error(format!(
            "Cannot derive a directory name from template repository '{}'",
            template.repository
        ))
        .into());
    }
    let clone_dir = root.join(&clone_name);

    let clone_args = vec!["clone".to_string(), template.repository.clone()];
    let result = runner.run(&template.git, &clone_args, root)?;
    if !result.success {
        return Err(ScaffoldError::command_failed_with_hint(
            "git clone",
            command_line(&template.git, &clone_args),
            result.exit_code,
            hints::clone_failed(),
        )
        .into());
    }

    let archive_args = vec![
        "archive".to_string(),
        "--format".to_string(),
        "tar".to_string(),
        "--output".to_string(),
        format!("./{}", ARCHIVE_NAME),
        "HEAD".to_string(),
    ];
    let result = runner.run(&template.git, &archive_args, &clone_dir)?;
    if !result.success {
        return Err(ScaffoldError::command_failed(
            "git archive",
            command_line(&template.git, &archive_args),
            result.exit_code,
        )
        .into());
    }

    let entries = extract_archive(&clone_dir.join(ARCHIVE_NAME), root)?;

    fs::remove_dir_all(&clone_dir)
        .with_context(|| format!("Failed to remove template clone: {}", clone_dir.display()))?;

    Ok(FetchSummary { clone_dir, entries })
}

/// Unpack a tar archive into `dest`, returning the number of entries written.
///
/// Entries whose paths would land outside `dest` abort the extraction.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| {
        ScaffoldError::extraction(
            format!("cannot open {}", archive_path.display()),
            Some(e),
        )
    })?;

    let mut archive = tar::Archive::new(file);
    let entries = archive
        .entries()
        .map_err(|e| ScaffoldError::extraction("cannot read archive", Some(e)))?;

    let mut count = 0;
    for entry in entries {
        let mut entry =
            entry.map_err(|e| ScaffoldError::extraction("corrupt archive entry", Some(e)))?;

        // git archive prepends a pax header carrying the commit id
        if entry.header().entry_type().is_pax_global_extensions() {
            continue;
        }

        let display_path = entry
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "<invalid path>".to_string());

        let unpacked = entry.unpack_in(dest).map_err(|e| {
            ScaffoldError::extraction(format!("cannot unpack {}", display_path), Some(e))
        })?;
        if !unpacked {
            return Err(ScaffoldError::extraction(
                format!("entry {} escapes the project directory", display_path),
                None,
            )
            .into());
        }
        count += 1;
    }

    Ok(count)
}
