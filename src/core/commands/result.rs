//! Command execution result type.

use crate::models::OutputLine;

/// Result of a successful command.
///
/// Commands can produce output and optionally ask the host to wipe the
/// display before it is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Clear the display first (`clear`)
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            clear_screen: false,
        }
    }

    /// Create a result that clears the display.
    pub fn clear() -> Self {
        Self {
            output: vec![],
            clear_screen: true,
        }
    }

    /// Create an empty result (no output, no clearing).
    pub fn empty() -> Self {
        Self::default()
    }
}
