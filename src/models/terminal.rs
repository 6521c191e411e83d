//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Classification tag attached to every output line.
///
/// The host uses it to pick a rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted command, prompt included.
    Command,
    /// Normal command output.
    System,
    /// Failure message.
    Error,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::System => "system",
            Self::Error => "error",
        }
    }
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Command with prompt and user input
    Command { prompt: String, input: String },
    /// Regular output
    System(String),
    /// Error message (red)
    Error(String),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn system(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::System(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn kind(&self) -> LineKind {
        match self.data {
            OutputLineData::Command { .. } => LineKind::Command,
            OutputLineData::System(_) => LineKind::System,
            OutputLineData::Error(_) => LineKind::Error,
        }
    }

    /// Rendered text of the line. Command echoes are the prompt followed by
    /// the input, exactly as they appeared when submitted.
    pub fn text(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{prompt}{input}"),
            OutputLineData::System(s) | OutputLineData::Error(s) => s.clone(),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl Eq for OutputLine {}

/// Append-only line display owned by the host.
///
/// The interpreter writes every line it produces through this trait and
/// never reads anything back.
pub trait OutputSink {
    /// Append one line at the bottom of the display.
    fn append(&mut self, line: OutputLine);

    /// Remove every line currently shown.
    fn clear(&mut self);
}

impl OutputSink for Vec<OutputLine> {
    fn append(&mut self, line: OutputLine) {
        self.push(line);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
