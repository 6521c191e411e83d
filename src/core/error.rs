//! Error types for the shell core.
//!
//! - [`FsError`] - validation failures raised by the virtual filesystem
//! - [`CommandError`] - user-visible command failures
//!
//! The `Display` text of [`CommandError`] is exactly the line shown to the
//! user, so the interpreter can report any failure with `to_string()`.

use thiserror::Error;

/// Directory creation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Name contains the path separator.
    #[error("invalid directory name: {0}")]
    InvalidName(String),
    /// A child with this name already exists.
    #[error("cannot create directory '{0}': File exists")]
    AlreadyExists(String),
}

/// Failures reported by command handlers and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("ls: cannot access '{0}': No such file or directory")]
    LsNotFound(String),
    #[error("cd: no such file or directory: {0}")]
    CdNotFound(String),
    #[error("mkdir: missing operand")]
    MkdirMissingOperand,
    #[error("mkdir: invalid directory name")]
    MkdirInvalidName,
    #[error("mkdir: cannot create directory '{0}': File exists")]
    MkdirExists(String),
    #[error("Command not found: {0}")]
    NotFound(String),
}

impl From<FsError> for CommandError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::InvalidName(_) => Self::MkdirInvalidName,
            FsError::AlreadyExists(name) => Self::MkdirExists(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CommandError::LsNotFound("x".into()).to_string(),
            "ls: cannot access 'x': No such file or directory"
        );
        assert_eq!(
            CommandError::CdNotFound("/nonexistent".into()).to_string(),
            "cd: no such file or directory: /nonexistent"
        );
        assert_eq!(
            CommandError::MkdirMissingOperand.to_string(),
            "mkdir: missing operand"
        );
        assert_eq!(
            CommandError::NotFound("foo".into()).to_string(),
            "Command not found: foo"
        );
    }

    #[test]
    fn test_fs_error_mapping() {
        assert_eq!(
            CommandError::from(FsError::InvalidName("a/b".into())),
            CommandError::MkdirInvalidName
        );
        let err = CommandError::from(FsError::AlreadyExists("foo".into()));
        assert_eq!(
            err.to_string(),
            "mkdir: cannot create directory 'foo': File exists"
        );
    }
}
