//! New project command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::create::{create_in, CreateArgs};
use crate::utils::paths::{absolute, ensure_dir};

/// Create a new directory and the project inside it
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Directory to create; its name is the default project name
    pub path: PathBuf,

    #[command(flatten)]
    pub args: CreateArgs,
}

impl NewCommand {
    /// Execute the new command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let root = absolute(&self.path)?;
        ensure_dir(&root)?;
        create_in(&root, &self.args, verbose)
    }
}
