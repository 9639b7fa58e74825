//! Interactive shell built on reedline
//!
//! This module wires the completion engine into the line editor:
//! - A completer bridging reedline's menu to the shared completion source
//! - Highlighting of known commands and options from the command index
//! - History-backed inline hints
//! - A prompt showing the active profile
//!
//! [`SharedState`] is the handle both the editor and the executor hold, so
//! `.profile` and `.fuzzy` take effect on the next keystroke.

mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod shared_state;

pub use completer::ShellCompleter;
pub use engine::{ReplEngine, TOGGLE_FUZZY_LINE};
pub use highlighter::IndexHighlighter;
pub use hinter::HistoryHinter;
pub use prompt::ShellPrompt;
pub use shared_state::{SharedSource, SharedState};
