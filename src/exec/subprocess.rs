//! Subprocess execution for git and the package manager
//!
//! Every external call in the pipeline goes through [`CommandRunner`] so the
//! stages can be driven by a recording fake in tests.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::error::ScaffoldError;
use crate::utils::tools::get_tool_hint;

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, -1 when terminated by a signal
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        let exit_code = status.code().unwrap_or(-1);
        Self {
            success: status.success(),
            exit_code,
            duration,
        }
    }

    /// Build a result from a bare exit code
    #[cfg(test)]
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            duration: Duration::ZERO,
        }
    }
}

/// Runs external programs on behalf of the pipeline.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    ///
    /// A non-zero exit is reported through [`CommandResult::success`], not as
    /// an `Err`; `Err` means the process could not be started at all.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandResult>;
}

/// Runner that spawns real processes attached to the terminal.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandResult> {
        if !command_exists(program) {
            return Err(ScaffoldError::missing_tool(
                program,
                format!("running `{}`", command_line(program, args)),
                get_tool_hint(program),
            )
            .into());
        }

        if self.verbose {
            eprintln!("Executing: {} (in {})", command_line(program, args), cwd.display());
        }

        let result = run_command(program, args, cwd)?;

        if self.verbose {
            eprintln!(
                "Finished: {} -> exit {} in {:.1}s",
                program,
                result.exit_code,
                result.duration.as_secs_f64()
            );
        }

        Ok(result)
    }
}

/// Run a command to completion in `cwd`, with no deadline.
///
/// Stdin, stdout and stderr are inherited so git and yarn can prompt and show
/// progress.
pub fn run_command(program: &str, args: &[String], cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program))?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Render a program and its arguments as one shell-like line
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake runner shared by the pipeline tests.

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use anyhow::Result;

    use super::{command_line, CommandResult, CommandRunner};

    type Hook = Box<dyn Fn(&[String], &Path) -> Result<()>>;

    /// One recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub line: String,
        pub cwd: PathBuf,
    }

    /// Records every call and answers with scripted exit codes.
    ///
    /// Exit codes are keyed by the full command line; unknown lines exit 0.
    /// Hooks keyed by the first argument run before the exit code is returned,
    /// which lets a fake `git clone` materialize files.
    #[derive(Default)]
    pub struct FakeRunner {
        pub calls: RefCell<Vec<Invocation>>,
        exit_codes: HashMap<String, i32>,
        hooks: HashMap<String, Hook>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail(mut self, line: &str, exit_code: i32) -> Self {
            self.exit_codes.insert(line.to_string(), exit_code);
            self
        }

        pub fn on(
            mut self,
            subcommand: &str,
            hook: impl Fn(&[String], &Path) -> Result<()> + 'static,
        ) -> Self {
            self.hooks.insert(subcommand.to_string(), Box::new(hook));
            self
        }

        pub fn lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.line.clone()).collect()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandResult> {
            let line = command_line(program, args);
            self.calls.borrow_mut().push(Invocation {
                line: line.clone(),
                cwd: cwd.to_path_buf(),
            });

            if let Some(hook) = args.first().and_then(|sub| self.hooks.get(sub)) {
                hook(args, cwd)?;
            }

            let code = self.exit_codes.get(&line).copied().unwrap_or(0);
            Ok(CommandResult::from_exit_code(code))
        }
    }
}
