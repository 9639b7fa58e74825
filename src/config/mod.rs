//! Configuration management for aws-shell
//!
//! This module handles loading, validating and saving the shell configuration:
//! - Configuration file (TOML format, `~/.aws/shell/config.toml` by default)
//! - Command-line arguments, applied on top by [`crate::cli`]
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::index::default_index_dir;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interactive shell behaviour
    #[serde(default)]
    pub shell: ShellConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Locations of the generated indices
    #[serde(default)]
    pub index: IndexConfig,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Fall back to fuzzy matching when no completion has the typed prefix
    #[serde(default = "default_true")]
    pub match_fuzzy: bool,

    /// Use vi key bindings instead of emacs
    #[serde(default)]
    pub enable_vi_bindings: bool,

    /// Show completions in columns instead of a single list
    #[serde(default)]
    pub show_completion_columns: bool,

    /// Highlight commands and options while typing
    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color_output: bool,
}

/// Command history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_true")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_true")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Index file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Command completion index (JSON)
    #[serde(default = "default_completions_file")]
    pub completions: PathBuf,

    /// Rendered documentation index (JSON)
    #[serde(default = "default_docs_file")]
    pub docs: PathBuf,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    default_index_dir().join("history")
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_completions_file() -> PathBuf {
    default_index_dir().join("completions.json")
}

fn default_docs_file() -> PathBuf {
    default_index_dir().join("docs.json")
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            match_fuzzy: true,
            enable_vi_bindings: false,
            show_completion_columns: false,
            syntax_highlighting: true,
            color_output: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: true,
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            completions: default_completions_file(),
            docs: default_docs_file(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Explicit path, or `None` for [`Config::default_config_path`]
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration, defaults when the file does not exist
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        debug!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(&path)?;
        Self::from_toml_str(&text)
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> PathBuf {
        default_index_dir().join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Generic(format!("Cannot serialize configuration: {e}")).into())
    }

    /// Persist `shell.match_fuzzy` to a configuration file
    ///
    /// Existing formatting and comments in the file are preserved; the file
    /// is created when it does not exist.
    pub fn save_match_fuzzy(path: &Path, enabled: bool) -> Result<()> {
        let text = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };
        let mut document: toml_edit::DocumentMut = text.parse()?;

        if !document.contains_table("shell") {
            document["shell"] = toml_edit::table();
        }
        document["shell"]["match_fuzzy"] = toml_edit::value(enabled);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document.to_string())?;
        debug!("Saved match_fuzzy = {enabled} to {}", path.display());
        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aws-shell-{}-{name}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.shell.match_fuzzy);
        assert!(!config.shell.enable_vi_bindings);
        assert!(config.shell.color_output);
        assert_eq!(config.history.max_size, 1000);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.index.completions.ends_with("completions.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml_str("[shell]\nenable_vi_bindings = true\n").unwrap();
        assert!(config.shell.enable_vi_bindings);
        assert!(config.shell.match_fuzzy);
        assert!(config.history.persist);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("[shell\nmatch_fuzzy = ").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from_file(Some(&temp_path("missing.toml"))).unwrap();
        assert_eq!(config.history.max_size, 1000);
    }

    #[test]
    fn test_validate_rejects_empty_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("match_fuzzy = true"));
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_save_match_fuzzy_preserves_comments() {
        let path = temp_path("config.toml");
        fs::write(&path, "# my settings\n[shell]\nmatch_fuzzy = true # keep\n").unwrap();

        Config::save_match_fuzzy(&path, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# my settings"));
        assert!(!Config::load_from_file(Some(&path)).unwrap().shell.match_fuzzy);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_match_fuzzy_creates_file() {
        let path = temp_path("fresh.toml");
        Config::save_match_fuzzy(&path, false).unwrap();
        let config = Config::load_from_file(Some(&path)).unwrap();
        assert!(!config.shell.match_fuzzy);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
