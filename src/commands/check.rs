//! Check command implementation
//!
//! Reports whether git and the configured package manager are on PATH.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::utils::tools::{check_tools, get_tool_hint};

/// Check that the required tools are installed
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Settings file
    #[arg(long, env = "CREATE_APP_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let settings = Settings::load(self.config.as_deref())?;
        let tools = [
            settings.template.git.as_str(),
            settings.package_manager.program.as_str(),
        ];

        println!("🔍 Checking required tools...\n");

        let mut missing = Vec::new();
        for (name, info) in check_tools(&tools) {
            match info {
                Some(info) => {
                    let version = info.version.unwrap_or_else(|| "unknown version".to_string());
                    println!("  {} {} ({})", style("✓").green(), name, version);
                    if verbose {
                        println!("      {}", info.path.display());
                    }
                }
                None => {
                    println!("  {} {} not found", style("✗").red(), name);
                    missing.push(name);
                }
            }
        }
        println!();

        if missing.is_empty() {
            println!("{} All required tools are available.", style("✓").green().bold());
            return Ok(());
        }

        let hint = missing
            .iter()
            .map(|name| format!("{}:\n{}", name, get_tool_hint(name)))
            .collect::<Vec<_>>()
            .join("\n\n");
        Err(ScaffoldError::missing_tool(missing.join(", "), "creating a project", hint).into())
    }
}
