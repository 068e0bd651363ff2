//! Project creation pipeline
//!
//! A strictly linear state machine:
//!
//! ```text
//! CheckPreconditions → CollectConfig → Fetch → Instantiate → UpdateManifest
//!   → InstallDeps → [InstallPeerDeps] → [Upgrade] → Success
//! ```
//!
//! Any failing stage moves straight to `Failure`. Nothing is retried and
//! nothing already written is cleaned up.

pub mod deps;
pub mod fetch;
pub mod instantiate;
pub mod manifest;
pub mod precheck;

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::config::project::{self, ConfigOverrides, ProjectConfig};
use crate::config::prompt::Prompter;
use crate::config::Settings;
use crate::exec::subprocess::CommandRunner;
use crate::utils::paths::{dir_name, manifest_path};
use crate::utils::terminal::{
    create_progress_bar, hidden_progress_bar, print_heading, print_info, print_step,
};

use deps::DependencyInstaller;

/// Numbered progress steps shown to the operator
const TOTAL_STEPS: usize = 4;

/// Pipeline states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckPreconditions,
    CollectConfig,
    Fetch,
    Instantiate,
    UpdateManifest,
    InstallDeps,
    InstallPeerDeps,
    Upgrade,
    Success,
    Failure,
}

/// Everything a run needs besides its collaborators
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory the project is created in
    pub root: PathBuf,
    /// Answers supplied on the command line
    pub overrides: ConfigOverrides,
    /// Template and package manager settings
    pub settings: Settings,
    /// Echo per-stage details
    pub verbose: bool,
}

/// Outcome of a run
#[derive(Debug)]
pub struct PipelineReport {
    /// Stages entered, in order, ending with `Success` or `Failure`
    pub stages: Vec<Stage>,
    /// The collected config on success, the failing stage's error otherwise
    pub outcome: Result<ProjectConfig>,
}

/// Drives the stages with injected command and prompt collaborators
pub struct Pipeline<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a mut dyn Prompter,
    options: PipelineOptions,
    config: Option<ProjectConfig>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a mut dyn Prompter,
        options: PipelineOptions,
    ) -> Self {
        Self {
            runner,
            prompter,
            options,
            config: None,
        }
    }

    /// Run every stage until `Success` or `Failure`
    pub fn run(mut self) -> PipelineReport {
        let mut stages = Vec::new();
        let mut stage = Stage::CheckPreconditions;
        let mut error = None;

        loop {
            stages.push(stage);
            if matches!(stage, Stage::Success | Stage::Failure) {
                break;
            }
            stage = match self.step(stage) {
                Ok(next) => next,
                Err(err) => {
                    error = Some(err);
                    Stage::Failure
                }
            };
        }

        let outcome = match error {
            Some(err) => Err(err),
            None => self
                .config
                .take()
                .ok_or_else(|| anyhow!("Pipeline finished without project details")),
        };

        PipelineReport { stages, outcome }
    }

    /// Execute one stage and return the next
    fn step(&mut self, stage: Stage) -> Result<Stage> {
        let root = self.options.root.clone();

        match stage {
            Stage::CheckPreconditions => {
                precheck::ensure_empty(&root)?;
                Ok(Stage::CollectConfig)
            }
            Stage::CollectConfig => {
                if !self.options.overrides.no_prompt {
                    print_heading("Enter project details:");
                }
                let config =
                    project::collect(self.prompter, &self.options.overrides, &dir_name(&root))?;
                self.config = Some(config);
                Ok(Stage::Fetch)
            }
            Stage::Fetch => {
                print_step(1, TOTAL_STEPS, "Copying template files...");
                let summary =
                    fetch::fetch_template(self.runner, &self.options.settings.template, &root)?;
                if self.options.verbose {
                    print_info(&format!(
                        "unpacked {} entries, removed {}",
                        summary.entries,
                        summary.clone_dir.display()
                    ));
                }
                Ok(Stage::Instantiate)
            }
            Stage::Instantiate => {
                let progress = if self.options.verbose {
                    hidden_progress_bar()
                } else {
                    create_progress_bar(0, "Filling in template")
                };
                let report = instantiate::instantiate(&root, self.config()?, &progress)?;
                progress.finish_and_clear();

                if self.options.verbose {
                    print_info(&format!(
                        "{} files visited, {} rewritten, {} with placeholders",
                        report.files_visited, report.files_rewritten, report.files_substituted
                    ));
                    for path in &report.binary_files {
                        print_info(&format!("left binary file as-is: {}", path.display()));
                    }
                    for (old, new) in &report.renamed {
                        print_info(&format!("renamed {} -> {}", old.display(), new.display()));
                    }
                }
                Ok(Stage::UpdateManifest)
            }
            Stage::UpdateManifest => {
                print_step(2, TOTAL_STEPS, "Updating package.json...");
                manifest::update_description(&manifest_path(&root), &self.config()?.description)?;
                Ok(Stage::InstallDeps)
            }
            Stage::InstallDeps => {
                print_step(3, TOTAL_STEPS, "Installing dependencies...");
                self.installer().install()?;
                Ok(self.after_install())
            }
            Stage::InstallPeerDeps => {
                self.installer().install_peer_deps()?;
                Ok(self.after_peer_deps())
            }
            Stage::Upgrade => {
                print_step(4, TOTAL_STEPS, "Upgrading dependencies...");
                self.installer().upgrade()?;
                Ok(Stage::Success)
            }
            Stage::Success | Stage::Failure => Ok(stage),
        }
    }

    fn config(&self) -> Result<&ProjectConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| anyhow!("Project details have not been collected"))
    }

    fn installer(&self) -> DependencyInstaller<'_> {
        DependencyInstaller::new(
            self.runner,
            &self.options.settings.package_manager,
            &self.options.root,
        )
    }

    fn after_install(&self) -> Stage {
        if self.options.settings.package_manager.peer_deps_enabled() {
            Stage::InstallPeerDeps
        } else {
            self.after_peer_deps()
        }
    }

    fn after_peer_deps(&self) -> Stage {
        if self.options.settings.package_manager.upgrade_enabled() {
            Stage::Upgrade
        } else {
            Stage::Success
        }
    }
}
