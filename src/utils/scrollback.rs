//! Bounded terminal scrollback.

use std::collections::VecDeque;

use crate::models::{OutputLine, OutputSink};

/// Terminal output buffer holding at most `capacity` lines.
///
/// When full, appending drops the oldest line.
#[derive(Clone, Debug)]
pub struct Scrollback {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl Scrollback {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Scrollback capacity must be greater than 0");
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }
}

impl OutputSink for Scrollback {
    fn append(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new(crate::config::MAX_TERMINAL_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sb: &Scrollback) -> Vec<String> {
        sb.iter().map(OutputLine::text).collect()
    }

    #[test]
    fn test_append_and_order() {
        let mut sb = Scrollback::new(4);
        sb.append(OutputLine::system("a"));
        sb.append(OutputLine::error("b"));
        assert_eq!(sb.len(), 2);
        assert_eq!(texts(&sb), ["a", "b"]);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut sb = Scrollback::new(3);
        for s in ["1", "2", "3", "4", "5"] {
            sb.append(OutputLine::system(s));
        }
        assert_eq!(sb.len(), 3);
        assert_eq!(texts(&sb), ["3", "4", "5"]);
    }

    #[test]
    fn test_clear() {
        let mut sb = Scrollback::new(2);
        sb.append(OutputLine::system("a"));
        sb.clear();
        assert!(sb.is_empty());
        for s in ["b", "c", "d"] {
            sb.append(OutputLine::system(s));
        }
        assert_eq!(texts(&sb), ["c", "d"]);
    }

    #[test]
    fn test_to_vec_keeps_ids() {
        let mut sb = Scrollback::default();
        let line = OutputLine::system("x");
        let id = line.id;
        sb.append(line);
        assert_eq!(sb.to_vec()[0].id, id);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = Scrollback::new(0);
    }
}
