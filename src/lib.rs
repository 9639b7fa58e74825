//! aws-shell library
//!
//! An interactive shell for a multi-level command-line tool. The core is a
//! completion engine that walks a static command index as the user types,
//! offering sub-commands, options and example values, with a fuzzy fallback.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Incremental completion engine and completion sources
//! - `config`: Configuration management
//! - `docs`: Documentation lookup for `.doc`
//! - `error`: Error types and handling
//! - `executor`: Running submitted lines and dot commands
//! - `index`: The command index and its loader
//! - `parser`: Classification of submitted lines
//! - `repl`: Interactive line editor
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use aws_shell::completion::ModelCompleter;
//! use aws_shell::index::CommandIndex;
//!
//! let index = CommandIndex::from_json_str(
//!     r#"{"aws": {"commands": ["ec2", "s3"], "children": {"ec2": {"commands": ["describe-instances"]}}}}"#,
//! )?;
//! let mut completer = ModelCompleter::new(Arc::new(index));
//! assert_eq!(completer.autocomplete("ec2 "), vec!["describe-instances"]);
//! # Ok::<(), aws_shell::ShellError>(())
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod docs;
pub mod error;
pub mod executor;
pub mod index;
pub mod parser;
pub mod repl;

// Re-export commonly used types
pub use completion::{CompletionSource, ModelCompleter};
pub use config::Config;
pub use error::{Result, ShellError};
pub use executor::{ExecutionContext, ExecutionResult};
pub use index::CommandIndex;
pub use parser::{Command, Parser};
pub use repl::{ReplEngine, SharedState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
