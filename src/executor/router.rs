//! Command router for dispatching commands to executors
//!
//! This module provides the CommandRouter which dispatches parsed commands
//! based on command type:
//! - CLI lines → `<root> <line>` through the system shell
//! - `!` lines → the system shell, verbatim
//! - Dot commands → DotExecutor

use std::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::parser::Command;

use super::context::ExecutionContext;
use super::dot::DotExecutor;
use super::result::ExecutionResult;
use super::runner::Invocation;

/// Command router that dispatches commands to appropriate executors
pub struct CommandRouter {
    /// Execution context
    context: ExecutionContext,
}

impl CommandRouter {
    /// Create a new command router
    pub fn new(context: ExecutionContext) -> Self {
        Self { context }
    }

    /// Route command to appropriate executor
    ///
    /// # Arguments
    /// * `command` - Parsed command
    ///
    /// # Returns
    /// * `Result<ExecutionResult>` - Execution result or error
    pub async fn route(&self, command: Command) -> Result<ExecutionResult> {
        debug!("Routing command: {:?}", command);
        let start = Instant::now();

        let result = match command {
            Command::Cli(line) => self.execute_cli(&line).await,
            Command::Shell(line) => self
                .context
                .run(Invocation::shell(&line))
                .await
                .map(ExecutionResult::exit_status),
            Command::Dot(dot) => DotExecutor::new(self.context.clone()).execute(dot).await,
            Command::Exit | Command::Empty => Ok(ExecutionResult::empty()),
        };

        debug!("Command executed in {}ms", start.elapsed().as_millis());
        result
    }

    async fn execute_cli(&self, line: &str) -> Result<ExecutionResult> {
        let full_command = format!("{} {line}", self.context.shared_state.root_name());
        self.context.add_to_history(full_command.clone()).await;
        let code = self.context.run(Invocation::shell(&full_command)).await?;
        Ok(ExecutionResult::exit_status(code))
    }
}
