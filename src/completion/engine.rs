//! Incremental completion engine
//!
//! The engine is called once per edit with the whole line typed so far. In
//! the common case the new line is the previous one plus one character, and
//! the engine advances its [`WalkState`] by looking only at the last token.
//! Any other edit (backspace, paste, cursor jumps) is handed to the full
//! reparse in [`fallback`](super::fallback), which replays the line from
//! scratch.

use std::sync::Arc;

use tracing::{debug, trace};

use super::fuzzy;
use super::state::WalkState;
use crate::index::{ArgumentMetadata, CommandIndex, CommandNode};

/// Stateful completer walking the command index.
pub struct ModelCompleter {
    /// Read-only command tree
    index: Arc<CommandIndex>,

    /// Current position in the tree
    state: WalkState,

    /// Fall back to fuzzy matching when no candidate has the typed prefix
    match_fuzzy: bool,
}

impl ModelCompleter {
    /// Create a completer positioned at the root of `index`.
    pub fn new(index: Arc<CommandIndex>) -> Self {
        let state = WalkState::new(index.root_name());
        Self {
            index,
            state,
            match_fuzzy: true,
        }
    }

    /// Return candidates for the line typed so far.
    ///
    /// Must be called for every edit, with the entire line rather than a
    /// delta. Misses are never errors: they produce an empty list.
    pub fn autocomplete(&mut self, line: &str) -> Vec<String> {
        let length = line.chars().count();
        if length == 0 {
            self.reset();
            return Vec::new();
        }

        if length == 1 && self.state.last_position > 1 {
            // First character of a new command after the previous one was submitted.
            debug!("Line shrank to one character, resetting walk state");
            self.reset();
        } else if length != self.state.last_position + 1 {
            return self.reparse(line);
        }

        self.state.last_position = length;

        if line.trim().is_empty() {
            return self.current_node().commands.clone();
        }

        let Some(last_word) = line.split_whitespace().last() else {
            return Vec::new();
        };

        if line.ends_with(char::is_whitespace) {
            self.complete_token(last_word)
        } else if last_word.starts_with('-') {
            let pool = self.option_pool();
            self.filter_candidates(last_word, &pool)
        } else {
            let pool = self.current_node().commands.clone();
            self.filter_candidates(last_word, &pool)
        }
    }

    /// Return to the root, forgetting the consumed path.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Signal that the current line was submitted for execution.
    pub fn on_command_submitted(&mut self) {
        debug!("Command submitted at {}", self.current_command());
        self.reset();
    }

    /// The deepest node consumed so far.
    pub fn current_node(&self) -> &CommandNode {
        self.index.node_at(self.state.command_path())
    }

    /// Read access to the walk state.
    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// The command index this completer walks.
    pub fn index(&self) -> &Arc<CommandIndex> {
        &self.index
    }

    /// Most recently completed option token (empty when none).
    pub fn last_option(&self) -> &str {
        self.state.last_option()
    }

    /// Command names consumed so far, root first.
    pub fn command_path(&self) -> &[String] {
        self.state.current_path()
    }

    /// Space-joined command path (e.g. `aws ec2`).
    pub fn current_command(&self) -> String {
        self.state.current_path().join(" ")
    }

    /// Dotted command name used as the documentation key (e.g. `aws.ec2`).
    pub fn dotted_command(&self) -> String {
        self.state.current_path().join(".")
    }

    pub fn match_fuzzy(&self) -> bool {
        self.match_fuzzy
    }

    pub fn set_match_fuzzy(&mut self, enabled: bool) {
        self.match_fuzzy = enabled;
    }

    /// Metadata for an option valid at the current node.
    ///
    /// Looks at the current node first and, below the root, at the global
    /// options.
    pub fn option_metadata(&self, option: &str) -> Option<&ArgumentMetadata> {
        self.current_node().metadata(option).or_else(|| {
            if self.state.is_at_root() {
                None
            } else {
                self.index.global_metadata(option)
            }
        })
    }

    /// Handle a line ending in whitespace: `last_word` was just finished.
    fn complete_token(&mut self, last_word: &str) -> Vec<String> {
        let index = Arc::clone(&self.index);
        let node = index.node_at(self.state.command_path());

        if !last_word.starts_with('-') {
            return match node.child(last_word) {
                Some(child) => {
                    trace!("Descending into {last_word}");
                    self.state.descend(last_word);
                    child.commands.clone()
                }
                // Probably a positional value rather than a sub-command.
                None => node.commands.clone(),
            };
        }

        if self.is_known_option(node, last_word) {
            self.state.last_option = last_word.to_string();
        }

        match self.option_metadata(last_word) {
            Some(metadata) if !metadata.example.is_empty() => vec![metadata.example.clone()],
            _ => node.commands.clone(),
        }
    }

    fn is_known_option(&self, node: &CommandNode, option: &str) -> bool {
        node.argument_metadata.contains_key(option)
            || node.arguments.iter().any(|a| a == option)
            || self.index.global_options().iter().any(|a| a == option)
    }

    /// Options valid at the current node, local ones first.
    fn option_pool(&self) -> Vec<String> {
        let node = self.current_node();
        let globals = self.index.global_options();
        let mut pool = node.arguments.clone();
        if !self.state.is_at_root() && node.arguments.as_slice() != globals {
            pool.extend(globals.iter().cloned());
        }
        pool
    }

    /// Exact-prefix matches in index order, or fuzzy-ranked matches when
    /// nothing has the prefix.
    fn filter_candidates(&self, word: &str, pool: &[String]) -> Vec<String> {
        let prefixed: Vec<String> = pool
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .cloned()
            .collect();

        if !prefixed.is_empty() || !self.match_fuzzy {
            return prefixed;
        }
        fuzzy::rank(word, pool)
    }
}
