use std::{fmt, io};

/// Crate-wide `Result` type using [`ShellError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Top-level error type for shell operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ShellError {
    /// Command index errors.
    Index(IndexError),

    /// Configuration errors.
    Config(ConfigError),

    /// Errors while running a submitted command.
    Execution(ExecutionError),

    /// I/O errors.
    Io(io::Error),

    /// Line editor errors.
    Editor(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Command index errors.
#[derive(Debug)]
pub enum IndexError {
    /// Index file not found.
    NotFound(String),

    /// Index content is not valid JSON for a command tree.
    InvalidFormat(String),

    /// The top-level object has no entries.
    MissingRoot,

    /// The top-level object has several entries and none was requested.
    AmbiguousRoot(Vec<String>),

    /// The requested root command is not present.
    UnknownRoot(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/// Errors raised while running submitted commands.
#[derive(Debug)]
pub enum ExecutionError {
    /// A child process could not be started.
    SpawnFailed { program: String, reason: String },

    /// Waiting on a child process failed.
    WaitFailed(String),

    /// A dot command was used incorrectly.
    Usage(String),

    /// The dot command does not exist.
    UnknownDotCommand(String),

    /// The child process was interrupted by the user.
    Cancelled,
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Index(e) => write!(f, "Command index error: {e}"),
            ShellError::Config(e) => write!(f, "Configuration error: {e}"),
            ShellError::Execution(e) => write!(f, "{e}"),
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
            ShellError::Editor(msg) => write!(f, "Line editor error: {msg}"),
            ShellError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::NotFound(path) => write!(f, "Index file not found: {path}"),
            IndexError::InvalidFormat(msg) => write!(f, "Invalid index format: {msg}"),
            IndexError::MissingRoot => write!(f, "Index has no root command"),
            IndexError::AmbiguousRoot(names) => {
                write!(f, "Index has several root commands: {}", names.join(", "))
            }
            IndexError::UnknownRoot(name) => write!(f, "Root command not in index: {name}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::SpawnFailed { program, reason } => {
                write!(f, "Unable to launch {program}: {reason}")
            }
            ExecutionError::WaitFailed(msg) => write!(f, "Command did not finish: {msg}"),
            ExecutionError::Usage(usage) => write!(f, "Usage:\n{usage}"),
            ExecutionError::UnknownDotCommand(name) => write!(f, "Unknown dot command: {name}"),
            ExecutionError::Cancelled => write!(f, "Command cancelled by user (Ctrl+C)"),
        }
    }
}

impl std::error::Error for ShellError {}
impl std::error::Error for IndexError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ExecutionError {}

/* ========================= Conversions to ShellError ========================= */

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<IndexError> for ShellError {
    fn from(err: IndexError) -> Self {
        ShellError::Index(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl From<ExecutionError> for ShellError {
    fn from(err: ExecutionError) -> Self {
        ShellError::Execution(err)
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Index(IndexError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        ShellError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml_edit::TomlError> for ShellError {
    fn from(err: toml_edit::TomlError) -> Self {
        ShellError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<reedline::ReedlineError> for ShellError {
    fn from(err: reedline::ReedlineError) -> Self {
        ShellError::Editor(err.to_string())
    }
}

impl From<String> for ShellError {
    fn from(msg: String) -> Self {
        ShellError::Generic(msg)
    }
}

impl From<&str> for ShellError {
    fn from(msg: &str) -> Self {
        ShellError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err: ShellError = IndexError::AmbiguousRoot(vec!["aws".into(), "gcloud".into()]).into();
        assert_eq!(
            err.to_string(),
            "Command index error: Index has several root commands: aws, gcloud"
        );
    }

    #[test]
    fn test_spawn_failure_display() {
        let err: ShellError = ExecutionError::SpawnFailed {
            program: "my-editor".into(),
            reason: "not found".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unable to launch my-editor: not found");
    }

    #[test]
    fn test_unknown_dot_command_display() {
        let err: ShellError = ExecutionError::UnknownDotCommand(".foo".into()).into();
        assert_eq!(err.to_string(), "Unknown dot command: .foo");
    }

    #[test]
    fn test_json_error_becomes_index_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ShellError = json_err.into();
        assert!(matches!(err, ShellError::Index(IndexError::InvalidFormat(_))));
    }
}
