//! Path utilities for create-app

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the project manifest at the template root
pub const MANIFEST_FILE: &str = "package.json";

/// Get the manifest path for a project root
pub fn manifest_path(project_root: &Path) -> PathBuf {
    project_root.join(MANIFEST_FILE)
}

/// The last component of a directory, used as the default project name
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Directory name `git clone` produces for a repository location.
///
/// Handles `git@host:org/repo.git`, `https://host/org/repo(.git)` and local
/// paths, ignoring trailing slashes.
pub fn clone_dir_name(repository: &str) -> String {
    let trimmed = repository.trim_end_matches(['/', '\\']);
    let last = trimmed
        .rsplit(['/', '\\', ':'])
        .next()
        .unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

/// Resolve a user-supplied path against the current directory
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(current_dir.join(path))
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_dir_name_variants() {
        assert_eq!(
            clone_dir_name("git@github.com:VHT/vht-cloud-services-ui-template.git"),
            "vht-cloud-services-ui-template"
        );
        assert_eq!(
            clone_dir_name("https://github.com/VHT/template/"),
            "template"
        );
        assert_eq!(clone_dir_name("/srv/git/local-template.git"), "local-template");
        assert_eq!(clone_dir_name("bare"), "bare");
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name(Path::new("/home/me/my-app")), "my-app");
        assert_eq!(dir_name(Path::new("/")), "");
    }

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let root = std::env::temp_dir();
        assert_eq!(absolute(&root).unwrap(), root);
        assert!(absolute(Path::new("relative")).unwrap().is_absolute());
    }
}
