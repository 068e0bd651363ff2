//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{check::CheckCommand, init::InitCommand, new::NewCommand};

/// create-app - scaffold a front-end application from the UI template
#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project in the current (empty) directory
    Init(InitCommand),

    /// Create a new directory and the project inside it
    New(NewCommand),

    /// Check that git and the package manager are installed
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        match self.command {
            Commands::Init(cmd) => cmd.execute(self.verbose),
            Commands::New(cmd) => cmd.execute(self.verbose),
            Commands::Check(cmd) => cmd.execute(self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init_flags() {
        let cli = Cli::try_parse_from([
            "create-app",
            "init",
            "--name",
            "sample",
            "--description",
            "demo",
            "--defaults",
            "--skip-upgrade",
        ])
        .unwrap();

        match cli.command {
            Commands::Init(cmd) => {
                assert_eq!(cmd.args.name.as_deref(), Some("sample"));
                assert_eq!(cmd.args.description.as_deref(), Some("demo"));
                assert!(cmd.args.defaults);
                assert!(cmd.args.skip_upgrade);
                assert!(!cmd.args.skip_peer_deps);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_new_with_global_verbose() {
        let cli = Cli::try_parse_from(["create-app", "new", "my-app", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::New(cmd) => assert_eq!(cmd.path.to_str(), Some("my-app")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
