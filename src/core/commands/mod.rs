//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against a session
//!
//! # Architecture
//!
//! Tokenized input is turned into the `Command` enum by exact, case-sensitive
//! name match, then executed via `execute_command`. Handlers report failures
//! as `CommandError`; the session turns those into error lines.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `ls /home`).
///
/// Stored as typed by the user; it is only checked when resolved against the
/// filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command. Arguments past the first are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List directories; defaults to the current directory.
    Ls(Option<PathArg>),
    /// Change directory; no argument means the home directory.
    Cd(Option<PathArg>),
    /// Create a directory in the current directory.
    Mkdir(Option<String>),
    Pwd,
    Clear,
    Help,
    Unknown(String),
}

impl Command {
    /// All recognized command names.
    #[cfg(test)]
    pub(crate) fn names() -> &'static [&'static str] {
        &["cd", "clear", "help", "ls", "mkdir", "pwd"]
    }

    /// Parse command from name and arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "mkdir" => Self::Mkdir(args.first().cloned()),
            "pwd" => Self::Pwd,
            "clear" => Self::Clear,
            "help" => Self::Help,
            _ => Self::Unknown(name.to_string()),
        }
    }
}
