//! Error handling for the shell.
//!
//! Completion itself never fails: traversal misses resolve to an empty node
//! or an empty candidate list. The errors defined here cover the edges of
//! the system:
//! - Loading and parsing the command index
//! - Loading, validating and saving configuration
//! - Reading lines and running submitted commands
//!
//! # Example
//!
//! ```rust,no_run
//! use aws_shell::error::Result;
//! use aws_shell::index::CommandIndex;
//!
//! fn load() -> Result<CommandIndex> {
//!     CommandIndex::load("completions.json")
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, ExecutionError, IndexError, Result, ShellError};
