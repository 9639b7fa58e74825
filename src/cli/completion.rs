//! Shell completion generation for aws-shell
//!
//! Generates completion scripts for bash, zsh and fish. On top of the
//! clap-generated script, the `--profile` flag completes profile names
//! reported by `aws configure list-profiles`.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

const BIN_NAME: &str = "aws-shell";

/// Write the completion script for `shell_name` to `out`
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
/// * `out` - Destination of the script
pub fn generate_completion<W: Write>(shell_name: &str, out: &mut W) -> Result<()> {
    let shell = parse_shell(shell_name)?;

    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);
    let basic_completion = String::from_utf8_lossy(&buffer);

    let profile_completion = match shell {
        Shell::Bash => BASH_PROFILES,
        Shell::Zsh => ZSH_PROFILES,
        _ => FISH_PROFILES,
    };
    write!(out, "{basic_completion}\n{profile_completion}")?;
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(ConfigError::Generic(format!(
            "Unsupported shell: {shell_name}. Supported shells: bash, zsh, fish"
        ))
        .into()),
    }
}

const BASH_PROFILES: &str = r#"
# Complete profile names for --profile
_aws_shell_enhanced() {
    local cur prev words cword
    _init_completion || return

    if [[ "$prev" == "--profile" ]]; then
        COMPREPLY=($(compgen -W "$(aws configure list-profiles 2>/dev/null)" -- "$cur"))
        return 0
    fi

    _aws-shell "$@"
}

complete -F _aws_shell_enhanced aws-shell
"#;

const ZSH_PROFILES: &str = r#"
# Complete profile names for --profile
_aws_shell_profiles() {
    local -a profiles
    profiles=($(aws configure list-profiles 2>/dev/null))
    _describe 'profiles' profiles
}

_aws_shell_enhanced() {
    if [[ ${words[CURRENT-1]} == "--profile" ]]; then
        _aws_shell_profiles
        return 0
    fi
    _aws-shell "$@"
}

compdef _aws_shell_enhanced aws-shell
"#;

const FISH_PROFILES: &str = r#"
# Complete profile names for --profile
complete -c aws-shell -l profile -f -a "(aws configure list-profiles 2>/dev/null)" -d "AWS profile"
"#;
