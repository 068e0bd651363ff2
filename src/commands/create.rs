//! Options shared by `init` and `new`, and the code that runs the pipeline

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::config::prompt::TerminalPrompter;
use crate::config::{ConfigOverrides, Settings};
use crate::exec::subprocess::SystemRunner;
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::utils::terminal::{print_banner, print_heading};

/// Project details and template options
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Project description written to package.json
    #[arg(long)]
    pub description: Option<String>,

    /// Repository name (defaults to the directory name)
    #[arg(long)]
    pub repo_name: Option<String>,

    /// camelCase application name (defaults to the camel case of the name)
    #[arg(long)]
    pub camel_name: Option<String>,

    /// Use default values (no prompts)
    #[arg(long)]
    pub defaults: bool,

    /// Custom template repository URL
    #[arg(long)]
    pub template: Option<String>,

    /// Settings file
    #[arg(long, env = "CREATE_APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the peer-dependency install
    #[arg(long)]
    pub skip_peer_deps: bool,

    /// Skip the final dependency upgrade
    #[arg(long)]
    pub skip_upgrade: bool,
}

impl CreateArgs {
    /// Settings from file, with command-line overrides applied
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;

        if let Some(template) = &self.template {
            settings.template.repository = template.clone();
        }
        if self.skip_peer_deps {
            settings.package_manager.peer_deps.clear();
        }
        if self.skip_upgrade {
            settings.package_manager.upgrade.clear();
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            name: self.name.clone(),
            description: self.description.clone(),
            repo_name: self.repo_name.clone(),
            camel_name: self.camel_name.clone(),
            no_prompt: self.defaults,
        }
    }
}

/// Create a project in `root` using real git/package-manager processes and
/// terminal prompts
pub fn create_in(root: &Path, args: &CreateArgs, verbose: bool) -> Result<()> {
    let settings = args.settings()?;
    let package_manager = settings.package_manager.program.clone();

    let options = PipelineOptions {
        root: root.to_path_buf(),
        overrides: args.overrides(),
        settings,
        verbose,
    };

    println!();
    print_heading("Create a new VHT Cloud Services UI project.");

    let runner = SystemRunner::new(verbose);
    let mut prompter = TerminalPrompter::new();
    let report = Pipeline::new(&runner, &mut prompter, options).run();

    if verbose {
        eprintln!("Stages: {:?}", report.stages);
    }

    report.outcome?;
    print_banner(&package_manager);
    Ok(())
}
