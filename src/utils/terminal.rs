//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

/// Print a numbered pipeline step, e.g. `[2/4] Updating package.json...`
pub fn print_step(index: usize, total: usize, message: &str) {
    println!(
        "{} {}",
        style(format!("[{}/{}]", index, total)).dim().bold(),
        message
    );
}

/// Print a blue heading line
pub fn print_heading(message: &str) {
    println!("{}", style(message).blue());
}

/// Print the completion banner shown after a successful run
pub fn print_banner(package_manager: &str) {
    println!();
    println!(
        "{}",
        style("⭐️ Application creation complete. ⭐️").green()
    );
    println!("You should now {} this project.", style("git init").blue());
    println!(
        "Run {} for a list of commands.",
        style(commands_hint(package_manager)).blue()
    );
}

/// Command that lists the template's scripts
fn commands_hint(package_manager: &str) -> String {
    format!("{} react-scripts", package_manager)
}

/// Create a progress bar with a known length
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let bar_style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(bar_style);
    pb.set_message(message.to_string());
    pb
}

/// A progress bar that draws nothing, used when verbose output is on
pub fn hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}
