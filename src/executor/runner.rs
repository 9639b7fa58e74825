//! Child process execution with Ctrl+C support
//!
//! Submitted commands run as child processes. While a child runs, the REPL
//! listens for Ctrl+C and cancels a [`CancellationToken`]; the runner then
//! kills the child instead of leaving it orphaned.

use async_trait::async_trait;
use tokio::process::Command as ProcessCommand;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ExecutionError, Result};

/// A program invocation with its extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to start
    pub program: String,

    /// Arguments passed to the program
    pub args: Vec<String>,

    /// Variables added to the inherited environment
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// Run `command_line` through the system shell.
    pub fn shell(command_line: &str) -> Self {
        Self {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), command_line.to_string()],
            env: Vec::new(),
        }
    }

    /// Run `program` with `args`.
    pub fn program<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}

/// Something able to run an [`Invocation`] to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the invocation, inheriting stdio.
    ///
    /// # Returns
    /// * `Result<Option<i32>>` - Exit code, `None` when killed by a signal
    async fn run(&self, invocation: &Invocation, cancel: CancellationToken) -> Result<Option<i32>>;
}

/// [`CommandRunner`] spawning real processes with `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation, cancel: CancellationToken) -> Result<Option<i32>> {
        debug!("Running {} {:?}", invocation.program, invocation.args);

        let mut child = ProcessCommand::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed {
                program: invocation.program.clone(),
                reason: e.to_string(),
            })?;

        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|e| ExecutionError::WaitFailed(e.to_string()))?;
                debug!("{} exited with {status}", invocation.program);
                Ok(status.code())
            }
            _ = cancel.cancelled() => {
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill {}: {e}", invocation.program);
                }
                Err(ExecutionError::Cancelled.into())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_shell_invocation() {
        let invocation = Invocation::shell("aws s3 ls").with_env("AWS_DEFAULT_PROFILE", "prod");
        assert_eq!(invocation.program, "sh");
        assert_eq!(invocation.args, vec!["-c", "aws s3 ls"]);
        assert_eq!(invocation.env, vec![("AWS_DEFAULT_PROFILE".to_string(), "prod".to_string())]);
    }

    #[tokio::test]
    async fn test_process_exit_code() {
        let code = ProcessRunner
            .run(&Invocation::shell("exit 3"), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(code, Some(3));
    }

    #[tokio::test]
    async fn test_environment_is_passed() {
        let invocation = Invocation::shell("test \"$AWS_DEFAULT_PROFILE\" = dev").with_env("AWS_DEFAULT_PROFILE", "dev");
        let code = ProcessRunner.run(&invocation, CancellationToken::new()).await.unwrap();
        assert_eq!(code, Some(0));
    }

    #[tokio::test]
    async fn test_cancellation_kills_child() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = ProcessRunner
            .run(&Invocation::shell("sleep 30"), cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::Execution(ExecutionError::Cancelled)));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let invocation = Invocation::program("/nonexistent/aws-shell-editor", ["file"]);
        let err = ProcessRunner.run(&invocation, CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, ShellError::Execution(ExecutionError::SpawnFailed { .. })));
    }
}
