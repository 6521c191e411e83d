//! Root application module.
//!
//! Contains the main App component, AppContext definition and TerminalState,
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::Terminal;
use crate::config::{ShellConfig, WELCOME_MESSAGE};
use crate::core::Session;
use crate::models::{CommandHistory, HistoryDirection, OutputLine, OutputSink};
use crate::utils::Scrollback;

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// Holds what the host owns: the scrollback shown on screen and the
/// history of submitted lines. The shell itself lives in [`AppContext`].
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Terminal output, bounded by `MAX_TERMINAL_HISTORY`.
    pub scrollback: RwSignal<Scrollback>,
    /// Submitted lines for up/down navigation.
    pub command_history: RwSignal<CommandHistory>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            scrollback: RwSignal::new(Scrollback::default()),
            command_history: RwSignal::new(CommandHistory::new()),
        }
    }

    /// Appends a single output line to the scrollback.
    pub fn push_output(&self, line: OutputLine) {
        self.scrollback.update(|sb| sb.append(line));
    }

    pub fn add_to_command_history(&self, cmd: &str) {
        self.command_history.update(|h| h.push(cmd));
    }

    pub fn navigate_history(&self, direction: HistoryDirection) -> Option<String> {
        let mut selected = None;
        self.command_history
            .update(|h| selected = h.navigate(direction));
        selected
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal state (scrollback, command history).
    pub terminal: TerminalState,

    /// The shell: directory tree and current directory.
    pub session: RwSignal<Session>,
}

impl AppContext {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            terminal: TerminalState::new(),
            session: RwSignal::new(Session::new(config)),
        }
    }

    /// Prompt string for the input line; tracks the current directory.
    pub fn get_prompt(&self) -> String {
        self.session.with(Session::prompt)
    }

    /// Run one submitted line and append its output to the scrollback.
    pub fn submit(&self, input: &str) {
        self.terminal.add_to_command_history(input);
        let scrollback = self.terminal.scrollback;
        self.session.update(|session| {
            scrollback.update(|sb| session.execute(input, sb));
        });
    }
}

/// Root application component.
///
/// Creates the [`AppContext`], prints the welcome line and renders the
/// terminal.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(&ShellConfig::default());
    ctx.terminal.push_output(OutputLine::system(WELCOME_MESSAGE));
    provide_context(ctx);

    view! { <Terminal /> }
}
