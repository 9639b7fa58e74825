//! Parser for lines submitted at the prompt
//!
//! A submitted line is one of:
//! - `exit` / `quit`
//! - a blank line
//! - a dot command (`.edit`, `.profile`, `.fuzzy`, `.doc`)
//! - a `!`-prefixed system shell command
//! - arguments for the wrapped CLI
//!
//! # Examples
//!
//! ```
//! use aws_shell::parser::{Command, Parser};
//!
//! let parser = Parser::new();
//! assert_eq!(parser.parse("exit").unwrap(), Command::Exit);
//! assert_eq!(parser.parse("!ls").unwrap(), Command::Shell("ls".to_string()));
//! assert_eq!(
//!     parser.parse("ec2 describe-instances").unwrap(),
//!     Command::Cli("ec2 describe-instances".to_string())
//! );
//! ```

mod command;
mod dot_commands;

pub use command::*;
pub use dot_commands::{DotCommandParser, DOC_USAGE, FUZZY_USAGE, PROFILE_USAGE};

use crate::error::Result;

/// Classifier for submitted lines
#[derive(Debug, Default)]
pub struct Parser {}

impl Parser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self {}
    }

    /// Parse an input string into a Command
    ///
    /// # Arguments
    /// * `input` - The line as submitted
    ///
    /// # Returns
    /// * `Result<Command>` - The classified line, or a usage error for a
    ///   malformed dot command
    pub fn parse(&self, input: &str) -> Result<Command> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(Command::Empty);
        }

        if matches!(trimmed, "exit" | "quit") {
            return Ok(Command::Exit);
        }

        if DotCommandParser::is_dot_command(trimmed) {
            return DotCommandParser::parse(trimmed).map(Command::Dot);
        }

        if let Some(rest) = trimmed.strip_prefix('!') {
            return Ok(Command::Shell(rest.to_string()));
        }

        Ok(Command::Cli(trimmed.to_string()))
    }
}
