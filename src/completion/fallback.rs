//! Full reparse for edits the incremental path cannot follow

use tracing::debug;

use super::engine::ModelCompleter;

impl ModelCompleter {
    /// Rebuild the walk state from scratch and complete `line`.
    ///
    /// Every proper prefix of `line` is replayed through the incremental
    /// path, one character at a time, so the resulting state is exactly the
    /// one incremental typing would have produced.
    pub(super) fn reparse(&mut self, line: &str) -> Vec<String> {
        debug!(
            "Reparsing line of {} chars (last position {})",
            line.chars().count(),
            self.state().last_position()
        );
        self.reset();
        for (end, _) in line.char_indices().skip(1) {
            self.autocomplete(&line[..end]);
        }
        self.autocomplete(line)
    }
}
