//! Package manager stages: install, peer install, upgrade

use std::path::Path;

use anyhow::Result;

use crate::config::settings::PackageManagerSettings;
use crate::error::{hints, ScaffoldError};
use crate::exec::subprocess::{command_line, CommandRunner};

/// Runs the configured package manager inside the project root
pub struct DependencyInstaller<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a PackageManagerSettings,
    root: &'a Path,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        settings: &'a PackageManagerSettings,
        root: &'a Path,
    ) -> Self {
        Self {
            runner,
            settings,
            root,
        }
    }

    /// Plain install (`yarn`)
    pub fn install(&self) -> Result<()> {
        self.run_step(
            "Dependency install",
            &self.settings.install,
            Some(hints::install_failed()),
        )
    }

    /// Peer-dependency install followed by a second plain install
    pub fn install_peer_deps(&self) -> Result<()> {
        self.run_step("Adding peer dependencies", &self.settings.peer_deps, None)?;
        self.install()
    }

    /// Tooling upgrade (`yarn run upgradevht`)
    pub fn upgrade(&self) -> Result<()> {
        self.run_step("Dependency upgrade", &self.settings.upgrade, None)
    }

    fn run_step(&self, step: &str, args: &[String], hint: Option<&str>) -> Result<()> {
        let program = &self.settings.program;
        let result = self.runner.run(program, args, self.root)?;
        if result.success {
            return Ok(());
        }

        let line = command_line(program, args);
        let err = match hint {
            Some(hint) => {
                ScaffoldError::command_failed_with_hint(step, line, result.exit_code, hint)
            }
            None => ScaffoldError::command_failed(step, line, result.exit_code),
        };
        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::subprocess::testing::FakeRunner;
    use tempfile::TempDir;

    #[test]
    fn test_install_runs_in_project_root() {
        let temp_dir = TempDir::new().unwrap();
        let settings = PackageManagerSettings::default();
        let runner = FakeRunner::new();

        DependencyInstaller::new(&runner, &settings, temp_dir.path())
            .install()
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].line, "yarn");
        assert_eq!(calls[0].cwd, temp_dir.path());
    }

    #[test]
    fn test_peer_deps_then_install() {
        let temp_dir = TempDir::new().unwrap();
        let settings = PackageManagerSettings::default();
        let runner = FakeRunner::new();

        DependencyInstaller::new(&runner, &settings, temp_dir.path())
            .install_peer_deps()
            .unwrap();

        assert_eq!(runner.lines(), vec!["yarn run react-scripts peerDeps", "yarn"]);
    }

    #[test]
    fn test_failed_peer_deps_skips_install() {
        let temp_dir = TempDir::new().unwrap();
        let settings = PackageManagerSettings::default();
        let runner = FakeRunner::new().fail("yarn run react-scripts peerDeps", 1);

        let err = DependencyInstaller::new(&runner, &settings, temp_dir.path())
            .install_peer_deps()
            .unwrap_err();

        assert!(err.to_string().contains("Adding peer dependencies failed"));
        assert_eq!(runner.lines(), vec!["yarn run react-scripts peerDeps"]);
    }

    #[test]
    fn test_install_failure_carries_exit_code_and_hint() {
        let temp_dir = TempDir::new().unwrap();
        let settings = PackageManagerSettings {
            program: "pnpm".into(),
            install: vec!["install".into()],
            ..Default::default()
        };
        let runner = FakeRunner::new().fail("pnpm install", 3);

        let err = DependencyInstaller::new(&runner, &settings, temp_dir.path())
            .install()
            .unwrap_err();

        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::CommandFailed {
                command,
                exit_code,
                hint,
                ..
            }) => {
                assert_eq!(command, "pnpm install");
                assert_eq!(*exit_code, 3);
                assert!(hint.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
