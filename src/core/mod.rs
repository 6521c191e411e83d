//! Core business logic for the shell.
//!
//! This module provides:
//! - [`VirtualFs`] in-memory directory tree and path resolution
//! - [`Command`] parsing and [`execute_command`] handlers
//! - [`Session`] holding the tree, the current directory and the prompt

pub mod commands;
pub mod error;
mod filesystem;
pub mod parser;
mod session;

pub use commands::{Command, CommandResult, execute_command};
pub use error::{CommandError, FsError};
pub use filesystem::{NodeId, NodeKind, VirtualFs};
pub use parser::parse_line;
pub use session::Session;
