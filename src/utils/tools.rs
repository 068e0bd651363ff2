//! Tool detection and validation
//!
//! The scaffolder shells out to git and a package manager; this module finds
//! them on PATH and explains how to install whatever is missing.

use std::path::PathBuf;
use std::process::Command;

use which::which;

use crate::error::hints;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Path to the tool executable
    pub path: PathBuf,
    /// Tool version string (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    match which(tool_name) {
        Ok(path) => {
            let version = get_tool_version(tool_name);
            Some(ToolInfo {
                path,
                version,
            })
        }
        Err(_) => None,
    }
}

/// Get tool version by running `tool --version`
fn get_tool_version(tool_name: &str) -> Option<String> {
    let output = Command::new(tool_name).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout);
    version
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}

/// Get installation hint for a tool
pub fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "git" => hints::git(),
        "yarn" => hints::yarn(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

/// Check multiple tools and return results
pub fn check_tools(tool_names: &[&str]) -> Vec<(String, Option<ToolInfo>)> {
    tool_names
        .iter()
        .map(|name| (name.to_string(), check_tool(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_none() {
        assert!(check_tool("no-such-tool-create-app").is_none());
    }

    #[test]
    fn test_known_hints() {
        assert!(get_tool_hint("git").contains("git-scm.com"));
        assert!(get_tool_hint("yarn").contains("corepack"));
        assert!(get_tool_hint("pnpm").contains("PATH"));
    }

    #[test]
    fn test_check_tools_reports_every_name() {
        let results = check_tools(&["no-such-tool-a", "no-such-tool-b"]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, info)| info.is_none()));
    }
}
