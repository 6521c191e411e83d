//! Submitted-command history with up/down navigation.

use crate::config::MAX_COMMAND_HISTORY;

/// Bounded list of previously submitted lines.
///
/// Navigation keeps a cursor into the list; `None` means the user is on a
/// fresh (empty) input line below the newest entry.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

/// Direction of a history step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries (ArrowUp).
    Older,
    /// Towards newer entries (ArrowDown).
    Newer,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a submitted line and reset the navigation cursor.
    ///
    /// Blank lines and repeats of the newest entry are not recorded.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
            if self.entries.len() > MAX_COMMAND_HISTORY {
                self.entries.remove(0);
            }
        }
        self.cursor = None;
    }

    /// Move the cursor one step and return the entry it lands on.
    ///
    /// Stepping older than the oldest entry stays on it; stepping newer than
    /// the newest entry leaves history and returns `None`.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.cursor = match (self.cursor, direction) {
            (None, HistoryDirection::Older) => Some(last),
            (None, HistoryDirection::Newer) => None,
            (Some(i), HistoryDirection::Older) => Some(i.saturating_sub(1)),
            (Some(i), HistoryDirection::Newer) if i < last => Some(i + 1),
            (Some(_), HistoryDirection::Newer) => None,
        };

        self.cursor.map(|i| self.entries[i].clone())
    }
}
