//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputLine`], [`LineKind`], [`OutputSink`] - Terminal output
//! - [`CommandHistory`] - Submitted-line history for up/down navigation

mod history;
mod terminal;

pub use history::{CommandHistory, HistoryDirection};
pub use terminal::{LineKind, OutputLine, OutputLineData, OutputSink};
