//! Walk state carried between completion calls

/// Position of the completion engine inside the command tree.
///
/// The state is owned by one [`ModelCompleter`](super::ModelCompleter) and
/// mutated only by it. It records which commands have been consumed so far
/// and how long the line was at the last incremental step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkState {
    /// Command names from the root (inclusive) to the current node
    path: Vec<String>,

    /// Line length, in characters, after the last incremental step
    pub(super) last_position: usize,

    /// Most recently completed option token
    pub(super) last_option: String,
}

impl WalkState {
    /// Create a state positioned at the root.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            path: vec![root_name.into()],
            last_position: 0,
            last_option: String::new(),
        }
    }

    /// Return to `(root, [root_name], 0, "")`.
    pub fn reset(&mut self) {
        self.path.truncate(1);
        self.last_position = 0;
        self.last_option.clear();
    }

    /// Full path, root name first.
    pub fn current_path(&self) -> &[String] {
        &self.path
    }

    /// Path below the root, suitable for [`CommandIndex::node_at`](crate::index::CommandIndex::node_at).
    pub fn command_path(&self) -> &[String] {
        &self.path[1..]
    }

    /// Name of the deepest command consumed so far.
    pub fn current_name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether no sub-command has been consumed yet.
    pub fn is_at_root(&self) -> bool {
        self.path.len() == 1
    }

    pub fn last_position(&self) -> usize {
        self.last_position
    }

    pub fn last_option(&self) -> &str {
        &self.last_option
    }

    pub(super) fn descend(&mut self, name: &str) {
        self.path.push(name.to_string());
    }
}
