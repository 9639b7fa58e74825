//! Dot command executor
//!
//! Runs the shell's built-in commands: `.edit`, `.profile`, `.fuzzy` and
//! `.doc`.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ExecutionError, Result};
use crate::parser::DotCommand;

use super::context::ExecutionContext;
use super::result::ExecutionResult;
use super::runner::Invocation;

const DEFAULT_EDITOR: &str = "vi";

/// Executor for dot commands
pub struct DotExecutor {
    context: ExecutionContext,
}

impl DotExecutor {
    /// Create a new dot command executor
    pub fn new(context: ExecutionContext) -> Self {
        Self { context }
    }

    /// Execute a dot command
    pub async fn execute(&self, command: DotCommand) -> Result<ExecutionResult> {
        match command {
            DotCommand::Edit => self.edit().await,
            DotCommand::Profile(name) => Ok(self.profile(name)),
            DotCommand::Fuzzy(setting) => Ok(self.fuzzy(setting)),
            DotCommand::Doc { commands, option } => Ok(self.doc(&commands, option.as_deref())),
            DotCommand::Unknown(name) => Err(ExecutionError::UnknownDotCommand(name).into()),
        }
    }

    /// Open the session's CLI history in `$EDITOR`
    async fn edit(&self) -> Result<ExecutionResult> {
        let history = self.context.get_history().await;
        let path = edit_file_path();
        fs::write(&path, history.join("\n"))?;

        let editor = env::var("EDITOR").unwrap_or_else(|_| DEFAULT_EDITOR.to_string());
        debug!("Opening {} with {editor}", path.display());
        let invocation = Invocation::program(&editor, [path.display().to_string()]);
        let result = self.context.run(invocation).await;

        if let Err(e) = fs::remove_file(&path) {
            warn!("Failed to remove {}: {e}", path.display());
        }
        result.map(ExecutionResult::exit_status)
    }

    fn profile(&self, name: Option<String>) -> ExecutionResult {
        let state = &self.context.shared_state;
        match name {
            Some(name) => {
                let message = format!("Current shell profile changed to: {name}");
                state.set_profile(Some(name));
                ExecutionResult::message(message)
            }
            None => match state.get_profile() {
                Some(profile) => ExecutionResult::message(format!("Current shell profile: {profile}")),
                None => ExecutionResult::message(
                    "Current shell profile: no profile configured\n\
                     You can change profiles using: .profile profile-name",
                ),
            },
        }
    }

    fn fuzzy(&self, setting: Option<bool>) -> ExecutionResult {
        let state = &self.context.shared_state;
        let enabled = setting.unwrap_or(!state.match_fuzzy());
        state.set_match_fuzzy(enabled);

        if let Some(path) = self.context.config_path() {
            if let Err(e) = Config::save_match_fuzzy(path, enabled) {
                warn!("Failed to save fuzzy setting: {e}");
            }
        }

        ExecutionResult::message(format!(
            "Fuzzy completion: {}",
            if enabled { "on" } else { "off" }
        ))
    }

    fn doc(&self, commands: &[String], option: Option<&str>) -> ExecutionResult {
        let root = self.context.shared_state.root_name();
        let dotted = std::iter::once(root)
            .chain(commands.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(".");

        let docs = self.context.docs();
        let text = match option {
            Some(option) => docs.extract_param(&dotted, option),
            None => docs.extract_description(&dotted),
        };

        if text.trim().is_empty() {
            let subject = match option {
                Some(option) => format!("{root} {} {option}", commands.join(" ")),
                None => format!("{root} {}", commands.join(" ")),
            };
            return ExecutionResult::message(format!("No documentation for {subject}"));
        }
        ExecutionResult::message(text.trim_end())
    }
}

fn edit_file_path() -> PathBuf {
    env::temp_dir().join(format!("aws-shell-{}.sh", Uuid::new_v4()))
}
