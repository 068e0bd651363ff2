//! Template instantiation
//!
//! Replaces placeholder tokens in every text file and in every directory or
//! file name below the project root. Paths are collected up front; renames
//! run deepest-first so no collected path goes stale before it is used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::ProjectConfig;

/// Replaced by [`ProjectConfig::name`]
pub const APPLICATION_NAME_TOKEN: &str = "{{application-name}}";
/// Replaced by [`ProjectConfig::repo_name`]
pub const REPO_NAME_TOKEN: &str = "{{repo-name}}";
/// Replaced by [`ProjectConfig::camel_name`]
pub const CAMEL_NAME_TOKEN: &str = "{{application-name-camel}}";

/// Token → value table for one project
#[derive(Debug, Clone)]
pub struct Substitutions {
    pairs: Vec<(&'static str, String)>,
}

impl Substitutions {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            pairs: vec![
                (APPLICATION_NAME_TOKEN, config.name.clone()),
                (REPO_NAME_TOKEN, config.repo_name.clone()),
                (CAMEL_NAME_TOKEN, config.camel_name.clone()),
            ],
        }
    }

    /// Replace every occurrence of every token
    pub fn apply(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |acc, (token, value)| acc.replace(token, value))
    }

    /// Whether any token occurs in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.pairs.iter().any(|(token, _)| text.contains(token))
    }
}

/// What instantiation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantiationReport {
    /// Every regular file found
    pub files_visited: usize,
    /// Text files rewritten (normalized even when no token occurred)
    pub files_rewritten: usize,
    /// Text files that contained at least one token
    pub files_substituted: usize,
    /// Non UTF-8 files left untouched
    pub binary_files: Vec<PathBuf>,
    /// Renames performed, as (old, new)
    pub renamed: Vec<(PathBuf, PathBuf)>,
}

/// Instantiate the template below `root` for `config`
pub fn instantiate(
    root: &Path,
    config: &ProjectConfig,
    progress: &ProgressBar,
) -> Result<InstantiationReport> {
    let substitutions = Substitutions::from_config(config);
    let (files, dirs, links) = collect_paths(root)?;
    let mut report = InstantiationReport::default();

    progress.set_length(files.len() as u64);

    for file in &files {
        report.files_visited += 1;
        match rewrite_file(file, &substitutions)? {
            Rewrite::Binary => report.binary_files.push(file.clone()),
            Rewrite::Normalized => report.files_rewritten += 1,
            Rewrite::Substituted => {
                report.files_rewritten += 1;
                report.files_substituted += 1;
            }
        }
        progress.inc(1);
    }

    report.renamed = rename_paths(
        files.into_iter().chain(dirs).chain(links),
        &substitutions,
    )?;

    Ok(report)
}

/// Collect every regular file, directory and symlink below `root` (root
/// excluded). Symlinks are not followed; they only take part in renames.
fn collect_paths(root: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    let mut links = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let file_type = entry.file_type();
        if file_type.is_file() {
            files.push(entry.into_path());
        } else if file_type.is_dir() {
            dirs.push(entry.into_path());
        } else if file_type.is_symlink() {
            links.push(entry.into_path());
        }
    }

    Ok((files, dirs, links))
}

enum Rewrite {
    Binary,
    Normalized,
    Substituted,
}

fn rewrite_file(path: &Path, substitutions: &Substitutions) -> Result<Rewrite> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => return Ok(Rewrite::Binary),
    };

    let substituted = substitutions.matches(&content);
    let new_content = format!("{}\n", substitutions.apply(&content).trim_end());

    fs::write(path, new_content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(if substituted {
        Rewrite::Substituted
    } else {
        Rewrite::Normalized
    })
}

/// Rename every path whose final component holds a token, deepest first
fn rename_paths(
    paths: impl IntoIterator<Item = PathBuf>,
    substitutions: &Substitutions,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut targets: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| {
            path.file_name()
                .map(|name| substitutions.matches(&name.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    targets.sort_by_key(|path| std::cmp::Reverse(path.components().count()));

    let mut renamed = Vec::with_capacity(targets.len());
    for old in targets {
        let name = match old.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let new = old.with_file_name(substitutions.apply(&name));

        // symlink_metadata so a dangling link at the target still counts
        if fs::symlink_metadata(&new).is_ok() {
            bail!(
                "Cannot rename {} to {}: target already exists",
                old.display(),
                new.display()
            );
        }

        fs::rename(&old, &new).with_context(|| {
            format!("Failed to rename {} to {}", old.display(), new.display())
        })?;
        renamed.push((old, new));
    }

    Ok(renamed)
}
