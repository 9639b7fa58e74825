//! Command type definitions
//!
//! This module defines the data structures a submitted line is classified
//! into before execution.

/// A classified line submitted at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the shell (`exit`, `quit`)
    Exit,

    /// Blank line, nothing to do
    Empty,

    /// Built-in command prefixed with `.`
    Dot(DotCommand),

    /// Line prefixed with `!`, run verbatim by the system shell
    Shell(String),

    /// Arguments for the wrapped CLI, run as `<root> <args>`
    Cli(String),
}

/// Built-in shell commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotCommand {
    /// Open the session's CLI history in `$EDITOR`
    Edit,

    /// Print the current profile, or switch to a new one
    Profile(Option<String>),

    /// Turn fuzzy completion on or off; `None` toggles
    Fuzzy(Option<bool>),

    /// Show documentation for a command path and an optional option
    Doc {
        commands: Vec<String>,
        option: Option<String>,
    },

    /// Anything else starting with `.`
    Unknown(String),
}

impl Command {
    /// Whether the line should be recorded in the CLI history used by `.edit`
    pub fn is_cli(&self) -> bool {
        matches!(self, Command::Cli(_))
    }
}
