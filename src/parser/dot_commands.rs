//! Dot command parser
//!
//! Parses the shell's built-in commands:
//! - `.edit`
//! - `.profile [name]`
//! - `.fuzzy [on|off]`
//! - `.doc <command...> [--option]`
//!
//! Unknown names are not an error at this stage: they are reported by the
//! executor so the user sees the offending token.

use crate::error::{ExecutionError, Result};
use crate::parser::command::DotCommand;

pub const PROFILE_USAGE: &str =
    ".profile           # Print the current profile\n.profile <name>    # Change the current profile\n";

pub const FUZZY_USAGE: &str =
    ".fuzzy             # Toggle fuzzy completion\n.fuzzy on|off      # Enable or disable fuzzy completion\n";

pub const DOC_USAGE: &str = ".doc <command> [sub-command...] [--option]\n";

/// Parser for `.`-prefixed commands
pub struct DotCommandParser;

impl DotCommandParser {
    /// Check if input is a dot command
    pub fn is_dot_command(input: &str) -> bool {
        input.starts_with('.')
    }

    /// Parse a dot command
    pub fn parse(input: &str) -> Result<DotCommand> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((name, args)) = parts.split_first() else {
            return Ok(DotCommand::Unknown(input.to_string()));
        };

        match *name {
            ".edit" => Ok(DotCommand::Edit),
            ".profile" => Self::parse_profile(args),
            ".fuzzy" => Self::parse_fuzzy(args),
            ".doc" => Self::parse_doc(args),
            other => Ok(DotCommand::Unknown(other.to_string())),
        }
    }

    fn parse_profile(args: &[&str]) -> Result<DotCommand> {
        match args {
            [] => Ok(DotCommand::Profile(None)),
            [name] => Ok(DotCommand::Profile(Some(name.to_string()))),
            _ => Err(ExecutionError::Usage(PROFILE_USAGE.to_string()).into()),
        }
    }

    fn parse_fuzzy(args: &[&str]) -> Result<DotCommand> {
        match args {
            [] => Ok(DotCommand::Fuzzy(None)),
            ["on"] => Ok(DotCommand::Fuzzy(Some(true))),
            ["off"] => Ok(DotCommand::Fuzzy(Some(false))),
            _ => Err(ExecutionError::Usage(FUZZY_USAGE.to_string()).into()),
        }
    }

    fn parse_doc(args: &[&str]) -> Result<DotCommand> {
        let (commands, option): (Vec<&str>, Vec<&str>) =
            args.iter().copied().partition(|arg| !arg.starts_with('-'));
        if commands.is_empty() || option.len() > 1 {
            return Err(ExecutionError::Usage(DOC_USAGE.to_string()).into());
        }

        Ok(DotCommand::Doc {
            commands: commands.into_iter().map(String::from).collect(),
            option: option.first().map(|o| o.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_edit() {
        assert_eq!(DotCommandParser::parse(".edit").unwrap(), DotCommand::Edit);
    }

    #[test]
    fn test_profile() {
        assert_eq!(
            DotCommandParser::parse(".profile").unwrap(),
            DotCommand::Profile(None)
        );
        assert_eq!(
            DotCommandParser::parse(".profile  prod ").unwrap(),
            DotCommand::Profile(Some("prod".to_string()))
        );
        let err = DotCommandParser::parse(".profile a b").unwrap_err();
        assert!(matches!(err, ShellError::Execution(ExecutionError::Usage(_))));
    }

    #[test]
    fn test_fuzzy() {
        assert_eq!(DotCommandParser::parse(".fuzzy").unwrap(), DotCommand::Fuzzy(None));
        assert_eq!(
            DotCommandParser::parse(".fuzzy off").unwrap(),
            DotCommand::Fuzzy(Some(false))
        );
        assert!(DotCommandParser::parse(".fuzzy maybe").is_err());
    }

    #[test]
    fn test_doc() {
        assert_eq!(
            DotCommandParser::parse(".doc ec2 describe-instances --instance-ids").unwrap(),
            DotCommand::Doc {
                commands: vec!["ec2".to_string(), "describe-instances".to_string()],
                option: Some("--instance-ids".to_string()),
            }
        );
        assert!(DotCommandParser::parse(".doc").is_err());
        assert!(DotCommandParser::parse(".doc --a --b").is_err());
    }

    #[test]
    fn test_unknown_keeps_name() {
        assert_eq!(
            DotCommandParser::parse(".foo bar").unwrap(),
            DotCommand::Unknown(".foo".to_string())
        );
    }
}
