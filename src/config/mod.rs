//! Configuration: settings file, project metadata and prompts

pub mod project;
pub mod prompt;
pub mod settings;
pub mod validation;

pub use project::{ConfigOverrides, ProjectConfig};
pub use settings::Settings;
