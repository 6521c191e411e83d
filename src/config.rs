//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Line shown once when a terminal starts.
pub const WELCOME_MESSAGE: &str = "Web Bash ready. Type \"help\" to see the commands.";

// =============================================================================
// Application Metadata
// =============================================================================

/// Host name displayed in the prompt.
pub const APP_NAME: &str = "webbash";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Path separator, also the name of the root node.
pub const SEPARATOR: char = '/';

/// Default user name; the home directory is `/home/<user>`.
pub const DEFAULT_USER: &str = "user";

/// Directory holding user home directories.
pub const HOME_ROOT: &str = "home";

/// Directories created inside the home directory at startup.
pub const SEED_DIRS: &[&str] = &["documents", "downloads", "projects"];

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Shell Configuration
// =============================================================================

/// Errors raised while loading a [`ShellConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Whether `name` can be a single path segment that resolves back to itself.
fn is_segment_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(SEPARATOR)
}

/// Per-session settings. Every field falls back to the constants above.
///
/// ```toml
/// user = "user"
/// host = "webbash"
/// home_dirs = ["documents", "downloads", "projects"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// User name shown in the prompt; also names the home directory.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Directories seeded inside the home directory, in creation order.
    pub home_dirs: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: APP_NAME.to_string(),
            home_dirs: SEED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check that `user` and every entry of `home_dirs` name one directory
    /// each and that `home_dirs` has no repeats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_segment_name(&self.user) {
            return Err(ConfigError::Invalid(format!(
                "user {:?} is not a valid directory name",
                self.user
            )));
        }
        for (i, dir) in self.home_dirs.iter().enumerate() {
            if !is_segment_name(dir) {
                return Err(ConfigError::Invalid(format!(
                    "home_dirs entry {dir:?} is not a valid directory name"
                )));
            }
            if self.home_dirs[..i].contains(dir) {
                return Err(ConfigError::Invalid(format!(
                    "home_dirs lists {dir:?} more than once"
                )));
            }
        }
        Ok(())
    }

    /// Absolute path of the home directory, e.g. `/home/user`.
    pub fn home_path(&self) -> String {
        format!("{SEPARATOR}{HOME_ROOT}{SEPARATOR}{}", self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.user, "user");
        assert_eq!(config.host, "webbash");
        assert_eq!(config.home_dirs, ["documents", "downloads", "projects"]);
        assert_eq!(config.home_path(), "/home/user");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ShellConfig::from_toml_str("user = \"ana\"").unwrap();
        assert_eq!(config.user, "ana");
        assert_eq!(config.host, "webbash");
        assert_eq!(config.home_path(), "/home/ana");
        assert_eq!(config.home_dirs.len(), 3);
    }

    #[test]
    fn test_full_toml() {
        let config = ShellConfig::from_toml_str(
            r#"
            user = "dev"
            host = "box"
            home_dirs = ["src"]
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "box");
        assert_eq!(config.home_dirs, ["src"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ShellConfig::from_toml_str("user = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    fn invalid(toml: &str) -> String {
        match ShellConfig::from_toml_str(toml) {
            Err(ConfigError::Invalid(msg)) => msg,
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ShellConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_user() {
        assert!(invalid("user = \"\"").contains("user"));
        assert!(invalid("user = \"a/b\"").contains("a/b"));
        assert!(invalid("user = \".\"").contains("user"));
        assert!(invalid("user = \"..\"").contains("user"));
    }

    #[test]
    fn test_rejects_bad_home_dirs() {
        assert!(invalid("home_dirs = [\"docs\", \"docs\"]").contains("more than once"));
        assert!(invalid("home_dirs = [\"a/b\"]").contains("a/b"));
        assert!(invalid("home_dirs = [\"\"]").contains("home_dirs"));
        assert!(invalid("home_dirs = [\"..\"]").contains("home_dirs"));
    }

    #[test]
    fn test_load_validates() {
        let path =
            std::env::temp_dir().join(format!("webbash-config-{}.toml", std::process::id()));
        std::fs::write(&path, "user = \"x/y\"").unwrap();
        let result = ShellConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_help_text_lines() {
        let lines: Vec<_> = HELP_TEXT.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[3], "  mkdir <name>   Create directory");
    }
}
