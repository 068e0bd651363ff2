//! Shared helpers for terminal output, paths and tool detection

pub mod paths;
pub mod terminal;
pub mod tools;
