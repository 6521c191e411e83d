//! Shell session: the directory tree, the current directory and the prompt.

use log::debug;

use crate::config::{HOME_ROOT, SEPARATOR, ShellConfig};
use crate::core::commands::{Command, execute_command};
use crate::core::filesystem::{NodeId, VirtualFs};
use crate::core::parser::parse_line;
use crate::models::{OutputLine, OutputSink};

/// Mutable state of one shell.
///
/// Every command runs to completion through [`Session::execute`] before the
/// next one starts; nothing else writes to the session.
#[derive(Clone, Debug)]
pub struct Session {
    fs: VirtualFs,
    cwd: NodeId,
    user: String,
    host: String,
    home_path: String,
}

impl Session {
    /// Seed the filesystem and start in the user's home directory.
    pub fn new(config: &ShellConfig) -> Self {
        let (fs, home) = VirtualFs::seeded(HOME_ROOT, &config.user, &config.home_dirs);
        debug!("session started for {}@{}", config.user, config.host);
        Self {
            fs,
            cwd: home,
            user: config.user.clone(),
            host: config.host.clone(),
            home_path: config.home_path(),
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub(crate) fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    /// The current directory.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub(crate) fn set_cwd(&mut self, id: NodeId) {
        self.cwd = id;
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    #[cfg(test)]
    pub(crate) fn set_home_path(&mut self, path: &str) {
        self.home_path = path.to_string();
    }

    /// Resolve `path` against the current directory.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        self.fs.resolve(path, self.cwd)
    }

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.fs.path_of(self.cwd)
    }

    /// Current path with the home directory collapsed to `~`.
    pub fn display_path(&self) -> String {
        let path = self.current_path();
        if path == self.home_path {
            return "~".to_string();
        }
        match path.strip_prefix(self.home_path.as_str()) {
            Some(rest) if rest.starts_with(SEPARATOR) => format!("~{rest}"),
            _ => path,
        }
    }

    /// Prompt text, e.g. `user@webbash:~/documents$ `.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, self.display_path())
    }

    /// Run one line of input.
    ///
    /// The trimmed line is always echoed after the prompt, even when empty.
    /// Failures are reported as error lines; nothing is returned to the
    /// caller.
    pub fn execute(&mut self, raw: &str, sink: &mut dyn OutputSink) {
        let input = raw.trim();
        sink.append(OutputLine::command(self.prompt(), input));

        let Some(parsed) = parse_line(input) else {
            return;
        };

        let cmd = Command::parse(&parsed.name, &parsed.args);
        debug!("execute {cmd:?}");

        match execute_command(cmd, self) {
            Ok(result) => {
                if result.clear_screen {
                    sink.clear();
                }
                for line in result.output {
                    sink.append(line);
                }
            }
            Err(err) => {
                debug!("command failed: {err}");
                sink.append(OutputLine::error(err.to_string()));
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}
