//! Project metadata collected from the operator

use anyhow::Result;

use super::prompt::{Prompter, Question};
use super::validation::validate_identifier;
use crate::error::{hints, ScaffoldError};

/// Values substituted into the template. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Application name, replaces `{{application-name}}`
    pub name: String,
    /// Written into package.json
    pub description: String,
    /// Repository name, replaces `{{repo-name}}`
    pub repo_name: String,
    /// camelCase application name, replaces `{{application-name-camel}}`
    pub camel_name: String,
}

#[cfg(test)]
impl ProjectConfig {
    /// Build a config from a name and description, deriving the other fields
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            repo_name: name.clone(),
            camel_name: to_camel_case(&name),
            description: description.into(),
            name,
        }
    }
}

/// Answers already supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_name: Option<String>,
    pub camel_name: Option<String>,
    /// Take defaults instead of prompting
    pub no_prompt: bool,
}

/// Ask for every value not given on the command line.
///
/// `default_name` (normally the target directory's name) seeds the name and
/// repository-name prompts; the camel-case prompt defaults to the camel case
/// of whatever name was chosen.
pub fn collect(
    prompter: &mut dyn Prompter,
    overrides: &ConfigOverrides,
    default_name: &str,
) -> Result<ProjectConfig> {
    let mut ask = |given: &Option<String>, question: Question| -> Result<String> {
        let missing =
            || ScaffoldError::missing_input(question.field, hints::flag_required(question.field));
        match given.as_deref().map(str::trim) {
            Some("") => Err(missing().into()),
            Some(value) => Ok(value.to_string()),
            None if overrides.no_prompt => question.default.clone().ok_or_else(|| missing().into()),
            None => prompter.ask(&question),
        }
    };

    let name = ask(
        &overrides.name,
        Question::new("name", "Project Name:").with_default(default_name),
    )?;
    let description = ask(
        &overrides.description,
        Question::new("description", "Description:"),
    )?;
    let repo_name = ask(
        &overrides.repo_name,
        Question::new("repo-name", "Repository Name:").with_default(default_name),
    )?;
    let camel_name = ask(
        &overrides.camel_name,
        Question::new("camel-name", "Camel-case Name:").with_default(to_camel_case(&name)),
    )?;

    let config = ProjectConfig {
        name,
        description,
        repo_name,
        camel_name,
    };

    validate_identifier("name", &config.name)?;
    validate_identifier("repo-name", &config.repo_name)?;
    validate_identifier("camel-name", &config.camel_name)?;

    Ok(config)
}

/// Convert `my-cool_app` / `My Cool App` into `myCoolApp`
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (index, word) in name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::prompt::ScriptedPrompter;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("sample"), "sample");
        assert_eq!(to_camel_case("my-cool-app"), "myCoolApp");
        assert_eq!(to_camel_case("My Cool_App"), "myCoolApp");
        assert_eq!(to_camel_case("--ui--v2"), "uiV2");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_new_derives_fields() {
        let config = ProjectConfig::new("task-board", "Tasks");
        assert_eq!(config.repo_name, "task-board");
        assert_eq!(config.camel_name, "taskBoard");
    }

    #[test]
    fn test_collect_prompts_in_order_with_defaults() {
        // Empty answers take the default
        let mut prompter = ScriptedPrompter::new(["", "demo", "", ""]);
        let config = collect(&mut prompter, &ConfigOverrides::default(), "sample-app").unwrap();

        assert_eq!(config.name, "sample-app");
        assert_eq!(config.description, "demo");
        assert_eq!(config.repo_name, "sample-app");
        assert_eq!(config.camel_name, "sampleApp");
        assert_eq!(
            prompter.asked,
            vec!["name", "description", "repo-name", "camel-name"]
        );
    }

    #[test]
    fn test_camel_default_follows_chosen_name() {
        let mut prompter = ScriptedPrompter::new(["order-desk", "orders", "", ""]);
        let config = collect(&mut prompter, &ConfigOverrides::default(), "dir").unwrap();
        assert_eq!(config.camel_name, "orderDesk");
        assert_eq!(config.repo_name, "dir");
    }

    #[test]
    fn test_overrides_skip_prompts() {
        let overrides = ConfigOverrides {
            name: Some("sample".into()),
            description: Some("demo".into()),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(["", ""]);
        let config = collect(&mut prompter, &overrides, "dir").unwrap();

        assert_eq!(config.name, "sample");
        assert_eq!(config.description, "demo");
        assert_eq!(prompter.asked, vec!["repo-name", "camel-name"]);
    }

    #[test]
    fn test_no_prompt_requires_description() {
        let overrides = ConfigOverrides {
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        let err = collect(&mut prompter, &overrides, "dir").unwrap_err();

        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::MissingInput { field, .. }) => assert_eq!(field, "description"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_no_prompt_with_description() {
        let overrides = ConfigOverrides {
            description: Some("demo".into()),
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        let config = collect(&mut prompter, &overrides, "web-shell").unwrap();
        assert_eq!(config, ProjectConfig::new("web-shell", "demo"));
    }

    #[test]
    fn test_no_prompt_without_name_default_names_the_field() {
        let overrides = ConfigOverrides {
            description: Some("demo".into()),
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        let err = collect(&mut prompter, &overrides, "").unwrap_err();

        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::MissingInput { field, hint }) => {
                assert_eq!(field, "name");
                assert!(hint.contains("--name"));
                assert!(!hint.contains("--description"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_description_flag_is_rejected() {
        let overrides = ConfigOverrides {
            description: Some("   ".into()),
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        let err = collect(&mut prompter, &overrides, "dir").unwrap_err();

        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::MissingInput { field, .. }) => assert_eq!(field, "description"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_flag_values_are_trimmed() {
        let overrides = ConfigOverrides {
            name: Some(" sample ".into()),
            description: Some(" demo\n".into()),
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        let config = collect(&mut prompter, &overrides, "dir").unwrap();
        assert_eq!(config.name, "sample");
        assert_eq!(config.description, "demo");
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let overrides = ConfigOverrides {
            name: Some("a/b".into()),
            description: Some("demo".into()),
            no_prompt: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<&str>::new());
        assert!(collect(&mut prompter, &overrides, "dir").is_err());
    }
}
