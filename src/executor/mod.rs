//! Command execution for submitted lines
//!
//! This module provides the execution layer that runs classified lines:
//! - The wrapped CLI, prefixed with the root command name
//! - System shell commands (`!` prefix)
//! - Dot commands (`.edit`, `.profile`, `.fuzzy`, `.doc`)
//!
//! Child processes go through a [`CommandRunner`] so the active profile is
//! exported consistently and Ctrl+C can kill the running child.

mod context;
mod dot;
mod result;
mod router;
mod runner;

pub use context::ExecutionContext;
pub use dot::DotExecutor;
pub use result::{ExecutionResult, ResultData};
pub use router::CommandRouter;
pub use runner::{CommandRunner, Invocation, ProcessRunner};

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::runner::testing::RecordingRunner;
    use super::*;
    use crate::completion::{ModelCompleter, ModelSource};
    use crate::docs::DocIndex;
    use crate::index::{CommandIndex, CommandNode};
    use crate::parser::{Command, Parser};
    use crate::repl::SharedState;

    fn context(runner: Arc<RecordingRunner>) -> ExecutionContext {
        let root = CommandNode::default().with_command("s3");
        let completer = ModelCompleter::new(Arc::new(CommandIndex::new("aws", root)));
        let state = SharedState::new(Box::new(ModelSource::new(completer)));
        ExecutionContext::new(state, Arc::new(DocIndex::new(HashMap::new())), runner)
    }

    #[tokio::test]
    async fn test_cli_line_is_prefixed_and_recorded() {
        let runner = Arc::new(RecordingRunner::default());
        let context = context(runner.clone());

        let command = Parser::new().parse("s3 ls").unwrap();
        let result = context.execute(command).await.unwrap();

        assert_eq!(result.data, ResultData::ExitStatus(Some(0)));
        assert_eq!(runner.recorded(), vec![Invocation::shell("aws s3 ls")]);
        assert_eq!(context.get_history().await, vec!["aws s3 ls"]);
    }

    #[tokio::test]
    async fn test_profile_is_exported() {
        let runner = Arc::new(RecordingRunner::default());
        let context = context(runner.clone());
        context.shared_state.set_profile(Some("dev".to_string()));

        context.execute(Command::Cli("s3 ls".to_string())).await.unwrap();
        let recorded = runner.recorded();
        assert_eq!(
            recorded[0].env,
            vec![("AWS_DEFAULT_PROFILE".to_string(), "dev".to_string())]
        );
    }

    #[tokio::test]
    async fn test_shell_escape_is_not_recorded() {
        let runner = Arc::new(RecordingRunner::default());
        let context = context(runner.clone());

        context.execute(Command::Shell("ls -la".to_string())).await.unwrap();
        assert_eq!(runner.recorded(), vec![Invocation::shell("ls -la")]);
        assert!(context.get_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_runs_nothing() {
        let runner = Arc::new(RecordingRunner::default());
        let context = context(runner.clone());
        let result = context.execute(Command::Empty).await.unwrap();
        assert_eq!(result, ExecutionResult::empty());
        assert!(runner.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_token_reset() {
        let mut context = context(Arc::default());
        let token = context.get_cancel_token();
        token.cancel();
        context.reset_cancel_token();
        assert!(!context.get_cancel_token().is_cancelled());
    }
}
