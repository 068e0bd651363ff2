//! Error types and helpers for user-friendly error messages
//!
//! Every pipeline failure ends the process with exit status 1. These variants
//! carry enough context to print a one-line diagnostic plus an actionable hint.

use std::path::PathBuf;

use thiserror::Error;

/// Scaffolding failures with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Target directory already has entries in it
    #[error("This directory is not empty: {}", .path.display())]
    DirectoryNotEmpty {
        path: PathBuf,
        entries: Vec<String>,
    },

    /// An external command exited with a non-zero status
    #[error("{step} failed: `{command}` exited with status {exit_code}")]
    CommandFailed {
        step: String,
        command: String,
        exit_code: i32,
        hint: Option<String>,
    },

    /// The template archive could not be unpacked
    #[error("Archive extraction failed: {message}")]
    Extraction {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// package.json is missing or malformed
    #[error("Manifest error in {}: {message}", .path.display())]
    Manifest {
        path: PathBuf,
        message: String,
    },

    /// A required answer was not supplied
    #[error("Missing required value: {field}")]
    MissingInput { field: String, hint: String },

    /// Settings file could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },
}

impl ScaffoldError {
    /// Create a non-empty directory error
    pub fn directory_not_empty(path: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self::DirectoryNotEmpty {
            path: path.into(),
            entries,
        }
    }

    /// Create a command failure error
    pub fn command_failed(
        step: impl Into<String>,
        command: impl Into<String>,
        exit_code: i32,
    ) -> Self {
        Self::CommandFailed {
            step: step.into(),
            command: command.into(),
            exit_code,
            hint: None,
        }
    }

    /// Create a command failure error with hint
    pub fn command_failed_with_hint(
        step: impl Into<String>,
        command: impl Into<String>,
        exit_code: i32,
        hint: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            step: step.into(),
            command: command.into(),
            exit_code,
            hint: Some(hint.into()),
        }
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::Extraction {
            message: message.into(),
            source,
        }
    }

    /// Create a manifest error
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing input error
    pub fn missing_input(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingInput {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a configuration error with hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// The hint to show under the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            ScaffoldError::DirectoryNotEmpty { .. } => Some(hints::directory_not_empty()),
            ScaffoldError::CommandFailed { hint, .. } | ScaffoldError::Config { hint, .. } => {
                hint.as_deref()
            }
            ScaffoldError::MissingInput { hint, .. } | ScaffoldError::MissingTool { hint, .. } => {
                Some(hint.as_str())
            }
            ScaffoldError::Extraction { .. } | ScaffoldError::Manifest { .. } => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let ScaffoldError::Extraction {
            source: Some(source),
            ..
        } = self
        {
            eprintln!("  caused by: {}", source);
        }

        if let Some(h) = self.hint() {
            eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
        }

        if let ScaffoldError::DirectoryNotEmpty { entries, .. } = self {
            if !entries.is_empty() {
                eprintln!("\n{}", style("FOUND:").cyan().bold());
                for entry in entries {
                    eprintln!("  • {}", entry);
                }
            }
        }

        if let ScaffoldError::MissingTool { required_for, .. } = self {
            eprintln!("\n{} {}", style("REQUIRED FOR:").cyan().bold(), required_for);
        }

        eprintln!();
    }
}

/// Print any error returned by a command, using hints when it is a
/// [`ScaffoldError`] and the context chain otherwise.
pub fn report(err: &anyhow::Error) {
    if let Some(scaffold) = err.downcast_ref::<ScaffoldError>() {
        scaffold.display_with_hints();
        return;
    }

    use console::style;
    eprintln!("\n{} {}", style("ERROR:").red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
    eprintln!();
}

/// Common hints
pub mod hints {
    /// Get hint for a non-empty target directory
    pub fn directory_not_empty() -> &'static str {
        "You should run this command from a new empty directory where the project will be created.\n\
         • Run: mkdir my-app && cd my-app && create-app init\n\
         • Or:  create-app new my-app"
    }

    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for missing Yarn
    pub fn yarn() -> &'static str {
        "Install Yarn from https://yarnpkg.com/ or enable it through corepack:\n\
         • corepack enable\n\
         • Or: npm install --global yarn"
    }

    /// Get hint for a failed template clone
    pub fn clone_failed() -> &'static str {
        "Could not clone the template repository. Check that:\n\
         • Your SSH key is registered with the Git host\n\
         • You have read access to the template repository\n\
         • The repository URL is correct (override with --template)"
    }

    /// Get hint for a failed install
    pub fn install_failed() -> &'static str {
        "Dependency installation failed. Try:\n\
         • Check your registry credentials (.npmrc / .yarnrc)\n\
         • Check your network connection\n\
         • Re-run the install manually inside the project directory"
    }

    /// Get hint for a value that has no default and was not given as a flag
    pub fn flag_required(field: &str) -> String {
        format!(
            "A value for {field} is required. Pass --{field} \"...\" or run in a terminal without --defaults to be prompted."
        )
    }

    /// Get hint for an invalid settings file
    pub fn invalid_settings() -> &'static str {
        "The settings file is invalid. Common issues:\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Command arguments must be arrays of strings, e.g. upgrade = [\"run\", \"upgradevht\"]"
    }
}
