//! Init command implementation

use anyhow::Result;
use clap::Args;

use super::create::{create_in, CreateArgs};

/// Create the project in the current directory
#[derive(Args, Debug)]
pub struct InitCommand {
    #[command(flatten)]
    pub args: CreateArgs,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let root = std::env::current_dir()?;
        create_in(&root, &self.args, verbose)
    }
}
