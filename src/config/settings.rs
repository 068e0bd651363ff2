//! Settings file parsing
//!
//! Settings say where the template lives and which package-manager commands
//! finalize a project. Every key is optional:
//!
//! ```toml
//! [template]
//! repository = "git@github.com:VHT/vht-cloud-services-ui-template.git"
//! git = "git"
//!
//! [package_manager]
//! program = "yarn"
//! install = []
//! peer_deps = ["run", "react-scripts", "peerDeps"]
//! upgrade = ["run", "upgradevht"]
//! ```
//!
//! An empty `peer_deps` or `upgrade` list turns that stage off.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{hints, ScaffoldError};

/// Template repository fetched when no override is given
pub const DEFAULT_TEMPLATE_REPOSITORY: &str =
    "git@github.com:VHT/vht-cloud-services-ui-template.git";

/// File name of the user-level settings file
pub const SETTINGS_FILE: &str = "config.toml";

/// Root settings, deserialized from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where to fetch the template from
    pub template: TemplateSettings,

    /// Package manager commands run after instantiation
    pub package_manager: PackageManagerSettings,
}

/// Template source settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateSettings {
    /// Repository location handed to `git clone`
    pub repository: String,

    /// Git executable
    pub git: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            repository: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            git: "git".to_string(),
        }
    }
}

/// Package manager settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerSettings {
    /// Package manager executable
    pub program: String,

    /// Arguments for a plain install
    pub install: Vec<String>,

    /// Arguments for the peer-dependency install; empty disables the stage
    pub peer_deps: Vec<String>,

    /// Arguments for the tooling upgrade; empty disables the stage
    pub upgrade: Vec<String>,
}

impl Default for PackageManagerSettings {
    fn default() -> Self {
        Self {
            program: "yarn".to_string(),
            install: Vec::new(),
            peer_deps: vec![
                "run".to_string(),
                "react-scripts".to_string(),
                "peerDeps".to_string(),
            ],
            upgrade: vec!["run".to_string(), "upgradevht".to_string()],
        }
    }
}

impl PackageManagerSettings {
    /// Whether the peer-dependency stage runs
    pub fn peer_deps_enabled(&self) -> bool {
        !self.peer_deps.is_empty()
    }

    /// Whether the upgrade stage runs
    pub fn upgrade_enabled(&self) -> bool {
        !self.upgrade.is_empty()
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| {
            ScaffoldError::config_error_with_hint(
                format!("Failed to parse settings: {}", e.message()),
                hints::invalid_settings(),
            )
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Resolve settings: explicit path, then the user config file, then defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ScaffoldError::config_error_with_hint(
                    format!("Settings file not found: {}", path.display()),
                    "Check the --config flag or the CREATE_APP_CONFIG environment variable",
                )
                .into());
            }
            return Self::load_from(path);
        }

        match Self::user_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Location of the per-user settings file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "create-app")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Reject settings that would make every run fail
    pub fn validate(&self) -> Result<()> {
        if self.template.repository.trim().is_empty() {
            return Err(ScaffoldError::config_error_with_hint(
                "template.repository must not be empty",
                "Set it to a git URL, e.g. repository = \"git@github.com:org/template.git\"",
            )
            .into());
        }
        if self.template.git.trim().is_empty() {
            return Err(ScaffoldError::config_error("template.git must not be empty").into());
        }
        if self.package_manager.program.trim().is_empty() {
            return Err(
                ScaffoldError::config_error("package_manager.program must not be empty").into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.template.repository, DEFAULT_TEMPLATE_REPOSITORY);
        assert_eq!(settings.package_manager.program, "yarn");
        assert!(settings.package_manager.install.is_empty());
        assert!(settings.package_manager.peer_deps_enabled());
        assert!(settings.package_manager.upgrade_enabled());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::parse(
            r#"
[template]
repository = "https://example.com/org/web-template.git"

[package_manager]
upgrade = []
"#,
        )
        .unwrap();

        assert_eq!(
            settings.template.repository,
            "https://example.com/org/web-template.git"
        );
        assert_eq!(settings.template.git, "git");
        assert_eq!(settings.package_manager.program, "yarn");
        assert!(!settings.package_manager.upgrade_enabled());
        assert!(settings.package_manager.peer_deps_enabled());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::parse("[template]\nrepo = \"x\"\n").unwrap_err();
        assert!(err.downcast_ref::<ScaffoldError>().is_some());
    }

    #[test]
    fn test_empty_program_is_rejected() {
        let err = Settings::parse("[package_manager]\nprogram = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("package_manager.program"));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[package_manager]\nprogram = \"pnpm\"\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.package_manager.program, "pnpm");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Settings::load(Some(&temp_dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
