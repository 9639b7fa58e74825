//! Execution context management
//!
//! This module provides the ExecutionContext which maintains state across
//! command executions: the shared REPL state, the CLI history used by
//! `.edit`, the documentation index and the process runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::docs::DocSource;
use crate::error::Result;
use crate::parser::Command;
use crate::repl::SharedState;

use super::result::ExecutionResult;
use super::router::CommandRouter;
use super::runner::{CommandRunner, Invocation};

/// Execution context that maintains state across commands
#[derive(Clone)]
pub struct ExecutionContext {
    /// Shared state with REPL
    pub(crate) shared_state: SharedState,

    /// Full CLI command lines run in this session
    history: Arc<RwLock<Vec<String>>>,

    /// Rendered documentation
    docs: Arc<dyn DocSource + Send + Sync>,

    /// Process runner
    runner: Arc<dyn CommandRunner>,

    /// Configuration file receiving persisted settings
    config_path: Option<PathBuf>,

    /// Cancelled when the user presses Ctrl+C during a command
    cancel_token: CancellationToken,
}

impl ExecutionContext {
    /// Create a new execution context
    ///
    /// # Arguments
    /// * `shared_state` - Shared state with REPL
    /// * `docs` - Documentation source for `.doc`
    /// * `runner` - Process runner for CLI, shell and editor commands
    pub fn new(
        shared_state: SharedState,
        docs: Arc<dyn DocSource + Send + Sync>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            shared_state,
            history: Arc::new(RwLock::new(Vec::new())),
            docs,
            runner,
            config_path: None,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Persist settings changed from inside the shell to `path`
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Execute a parsed command
    pub async fn execute(&self, command: Command) -> Result<ExecutionResult> {
        CommandRouter::new(self.clone()).route(command).await
    }

    /// Run an invocation with the active profile exported
    pub(crate) async fn run(&self, invocation: Invocation) -> Result<Option<i32>> {
        let invocation = match self.shared_state.get_profile() {
            Some(profile) => invocation.with_env("AWS_DEFAULT_PROFILE", &profile),
            None => invocation,
        };
        self.runner.run(&invocation, self.cancel_token.clone()).await
    }

    /// Add command to execution history
    pub async fn add_to_history(&self, command: String) {
        let mut history = self.history.write().await;
        history.push(command);
    }

    /// Get execution history
    pub async fn get_history(&self) -> Vec<String> {
        let history = self.history.read().await;
        history.clone()
    }

    pub fn docs(&self) -> &(dyn DocSource + Send + Sync) {
        self.docs.as_ref()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Token cancelled by the Ctrl+C listener
    pub fn get_cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Start a fresh token before the next command
    pub fn reset_cancel_token(&mut self) {
        self.cancel_token = CancellationToken::new();
    }
}
