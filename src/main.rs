//! aws-shell - an interactive shell for the AWS CLI
//!
//! Provides an interactive REPL with incremental, fuzzy autocompletion
//! driven by a pre-built command index.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! aws-shell --profile dev
//!
//! # Inspect the command index
//! aws-shell index --stats
//! ```

use std::process;
use std::sync::Arc;

use tracing::{debug, warn};

use aws_shell::cli::CliInterface;
use aws_shell::completion::{ModelCompleter, ServerSideSource, StaticResourceLookup};
use aws_shell::docs::DocIndex;
use aws_shell::error::Result;
use aws_shell::executor::{ExecutionContext, ProcessRunner, ResultData};
use aws_shell::index::CommandIndex;
use aws_shell::parser::Command;
use aws_shell::repl::{ReplEngine, SharedState};

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive shell
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand().await? {
        return Ok(());
    }

    run_interactive_mode(&cli).await
}

/// Run application in interactive REPL mode
async fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let shared_state = initialize_shared_state(cli)?;
    let docs = DocIndex::load(&cli.config().index.docs)?;
    let exec_context = ExecutionContext::new(shared_state.clone(), Arc::new(docs), Arc::new(ProcessRunner))
        .with_config_path(Some(cli.config_path()));
    let mut repl = ReplEngine::new(shared_state, cli.config())?;

    run_repl_loop(&mut repl, &exec_context).await
}

/// Load the command index and build the state shared by editor and executor
fn initialize_shared_state(cli: &CliInterface) -> Result<SharedState> {
    let config = cli.config();
    let index = CommandIndex::load(&config.index.completions)?;
    debug!("Loaded command index rooted at {}", index.root_name());

    let mut completer = ModelCompleter::new(Arc::new(index));
    completer.set_match_fuzzy(config.shell.match_fuzzy);
    let source = ServerSideSource::new(completer, StaticResourceLookup::new());

    let shared_state = SharedState::new(Box::new(source));
    shared_state.set_profile(cli.profile().map(str::to_string));
    shared_state.set_color_enabled(config.shell.color_output);
    Ok(shared_state)
}

/// Main REPL loop
async fn run_repl_loop(repl: &mut ReplEngine, exec_context: &ExecutionContext) -> Result<()> {
    while repl.is_running() {
        // Reset cancellation token for each command
        let mut context = exec_context.clone();
        context.reset_cancel_token();

        let input = match repl.read_line()? {
            Some(line) => line,
            None => break,
        };

        let command = match repl.process_input(&input) {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Exit => break,
            Command::Empty => continue,
            _ => {}
        }

        let cancel_token = context.get_cancel_token();
        let ctrl_c_handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => cancel_token.cancel(),
                Err(err) => warn!("Failed to listen for Ctrl+C: {err}"),
            }
        });

        execute_and_display(&context, command).await;

        ctrl_c_handle.abort();
    }

    Ok(())
}

/// Execute command and display result
async fn execute_and_display(exec_context: &ExecutionContext, command: Command) {
    match exec_context.execute(command).await {
        Ok(result) => match result.data {
            ResultData::Message(message) => println!("{message}"),
            ResultData::ExitStatus(code) if !result.success => {
                debug!("Command exited with status {code:?}");
            }
            _ => {}
        },
        Err(e) => eprintln!("{e}"),
    }
}

/// Initialize logging system based on the effective log level
///
/// # Arguments
/// * `cli` - CLI interface with logging settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
