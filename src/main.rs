//! create-app - scaffold a front-end application from a template repository
//!
//! ## Architecture
//!
//! ```text
//! CLI → pipeline (precheck → prompts → git fetch → instantiate → package.json → yarn)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod pipeline;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        error::report(&err);
        std::process::exit(1);
    }
}
