//! Line editor setup and input reading

use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, Keybindings, ListMenu,
    MenuBuilder, EditMode, Reedline, ReedlineEvent, ReedlineMenu, Signal, Vi,
};
use tracing::{debug, warn};

use crate::config::{Config, HistoryConfig};
use crate::error::{Result, ShellError};
use crate::parser::{Command, Parser};

use super::completer::ShellCompleter;
use super::highlighter::IndexHighlighter;
use super::hinter::HistoryHinter;
use super::prompt::ShellPrompt;
use super::shared_state::SharedState;

const COMPLETION_MENU: &str = "completion_menu";

/// Line submitted when F2 is pressed
pub const TOGGLE_FUZZY_LINE: &str = ".fuzzy";

/// REPL engine for interactive command entry
pub struct ReplEngine {
    /// Line editor
    editor: Reedline,

    /// Shared state with execution context
    shared_state: SharedState,

    /// Parser for submitted lines
    parser: Parser,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `shared_state` - Shared state with execution context
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(shared_state: SharedState, config: &Config) -> Result<Self> {
        let highlighter = {
            let source = shared_state.lock_source();
            IndexHighlighter::new(
                source.completer().index(),
                config.shell.syntax_highlighting && shared_state.get_color_enabled(),
            )
        };

        let menu = if config.shell.show_completion_columns {
            ReedlineMenu::EngineCompleter(Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU)))
        } else {
            ReedlineMenu::EngineCompleter(Box::new(ListMenu::default().with_name(COMPLETION_MENU)))
        };

        let editor = Reedline::create()
            .with_history(Box::new(create_history(&config.history)?))
            .with_completer(Box::new(ShellCompleter::new(shared_state.clone())))
            .with_menu(menu)
            .with_highlighter(Box::new(highlighter))
            .with_hinter(Box::new(HistoryHinter::new()))
            .with_ansi_colors(shared_state.get_color_enabled())
            .with_edit_mode(edit_mode(config.shell.enable_vi_bindings));

        Ok(Self {
            editor,
            shared_state,
            parser: Parser::new(),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, or None on Ctrl+C / Ctrl+D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let prompt = ShellPrompt::new(self.shared_state.root_name(), self.shared_state.get_profile());
        let signal = self.editor.read_line(&prompt)?;
        self.shared_state.on_command_submitted();

        match signal {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC | Signal::CtrlD => {
                debug!("Input interrupted");
                self.running = false;
                Ok(None)
            }
            #[allow(unreachable_patterns)]
            _ => Ok(None),
        }
    }

    /// Parse a submitted line
    pub fn process_input(&self, input: &str) -> Result<Command> {
        self.parser.parse(input)
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the REPL after the current line
    pub fn stop(&mut self) {
        self.running = false;
    }
}

fn create_history(config: &HistoryConfig) -> Result<FileBackedHistory> {
    let history = if config.persist {
        if let Some(parent) = config.file_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create history directory {}: {e}", parent.display());
            }
        }
        FileBackedHistory::with_file(config.max_size, config.file_path.clone())
    } else {
        FileBackedHistory::new(config.max_size)
    };
    history.map_err(|e| ShellError::Editor(format!("Failed to open history: {e}")))
}

fn edit_mode(vi: bool) -> Box<dyn EditMode> {
    if vi {
        let mut insert = default_vi_insert_keybindings();
        let mut normal = default_vi_normal_keybindings();
        add_shell_bindings(&mut insert);
        add_shell_bindings(&mut normal);
        Box::new(Vi::new(insert, normal))
    } else {
        let mut keybindings = default_emacs_keybindings();
        add_shell_bindings(&mut keybindings);
        Box::new(Emacs::new(keybindings))
    }
}

/// Tab opens the completion menu, F2 toggles fuzzy matching.
fn add_shell_bindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::F(2),
        ReedlineEvent::ExecuteHostCommand(TOGGLE_FUZZY_LINE.to_string()),
    );
}
