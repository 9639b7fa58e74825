//! Command-line interface for aws-shell
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Overriding configuration values from flags
//! - Non-interactive subcommands (version, completion, config, index)

pub mod completion;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::index::CommandIndex;

/// Interactive shell with context-aware, fuzzy autocompletion for the AWS CLI
#[derive(Parser, Debug)]
#[command(
    name = "aws-shell",
    version,
    about = "Interactive shell for the AWS CLI",
    long_about = "An interactive shell that wraps a multi-level command-line tool and offers
incremental, context-aware and fuzzy autocompletion of its commands and options."
)]
pub struct CliArgs {
    /// Profile exported to every command as AWS_DEFAULT_PROFILE
    #[arg(short = 'p', long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Command completion index (JSON)
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Rendered documentation index (JSON)
    #[arg(long, value_name = "FILE")]
    pub docs: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Use vi key bindings
    #[arg(long)]
    pub vi: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for aws-shell
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Inspect the command index
    Index {
        /// Print node, command and option counts
        #[arg(long)]
        stats: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = match Config::load_from_file(args.config_file.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load configuration: {e}");
                eprintln!("Using default configuration instead.");
                Config::default()
            }
        };

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {e}");
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);
        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Profile requested on the command line
    pub fn profile(&self) -> Option<&str> {
        self.args.profile.as_deref()
    }

    /// Configuration file path (from args or default)
    pub fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }

    /// Apply CLI arguments to configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_shell_args(config, args);
        Self::apply_logging_args(config, args);
        Self::apply_index_args(config, args);
    }

    fn apply_shell_args(config: &mut Config, args: &CliArgs) {
        if args.no_color {
            config.shell.color_output = false;
        }
        if args.vi {
            config.shell.enable_vi_bindings = true;
        }
    }

    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    fn apply_index_args(config: &mut Config, args: &CliArgs) {
        if let Some(index) = &args.index {
            config.index.completions = index.clone();
        }
        if let Some(docs) = &args.docs {
            config.index.docs = docs.clone();
        }
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub async fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell, &mut io::stdout())?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Index { stats }) => {
                self.handle_index_command(*stats)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("aws-shell version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            let path = self.config_path();
            println!("Configuration file: {}", path.display());
            println!();
            println!("{}", self.config.to_toml()?);
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist");
            return;
        }

        match Config::load_from_file(Some(&path)) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {e}"),
            },
            Err(e) => println!("Failed to load configuration: {e}"),
        }
    }

    /// Handle index subcommand
    fn handle_index_command(&self, stats: bool) -> Result<()> {
        let path = &self.config.index.completions;
        let index = CommandIndex::load(path)?;
        println!("Index: {}", path.display());
        println!("Root command: {}", index.root_name());

        if stats {
            let stats = index.stats();
            println!("Nodes: {}", stats.nodes);
            println!("Commands: {}", stats.commands);
            println!("Options: {}", stats.arguments);
            println!("Max depth: {}", stats.max_depth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv.iter().copied()).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["aws-shell"]).unwrap();
        assert!(args.profile.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args = CliArgs::try_parse_from(["aws-shell", "--no-color", "--quiet", "-p", "prod"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
        assert_eq!(args.profile.as_deref(), Some("prod"));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = cli(&["aws-shell", "--no-color", "--vi", "--index", "/tmp/idx.json"]);
        assert!(!cli.config().shell.color_output);
        assert!(cli.config().shell.enable_vi_bindings);
        assert_eq!(cli.config().index.completions, PathBuf::from("/tmp/idx.json"));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli(&["aws-shell", "--vv"]).config().logging.level, LogLevel::Trace);
        assert_eq!(cli(&["aws-shell", "-v"]).config().logging.level, LogLevel::Debug);
        assert_eq!(cli(&["aws-shell", "-q"]).config().logging.level, LogLevel::Error);
        assert_eq!(cli(&["aws-shell"]).config().logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_subcommands_parse() {
        let args = CliArgs::try_parse_from(["aws-shell", "index", "--stats"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Index { stats: true })));

        let args = CliArgs::try_parse_from(["aws-shell", "completion", "zsh"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Completion { ref shell }) if shell == "zsh"));
    }

    #[test]
    fn test_no_subcommand_continues() {
        let cli = cli(&["aws-shell"]);
        let handled = tokio_test::block_on(cli.handle_subcommand()).unwrap();
        assert!(!handled);
    }

    #[test]
    fn test_profile_accessor() {
        assert_eq!(cli(&["aws-shell", "--profile", "dev"]).profile(), Some("dev"));
        assert!(cli(&["aws-shell"]).profile().is_none());
    }
}
