//! Inline hints from earlier command lines

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History, SearchQuery};

/// Suggests the rest of the most recent history entry sharing the typed prefix
pub struct HistoryHinter {
    style: Style,
    current_hint: String,
}

impl HistoryHinter {
    pub fn new() -> Self {
        Self {
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }
}

impl Default for HistoryHinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Hinter for HistoryHinter {
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        if pos != line.len() || line.trim().is_empty() {
            return String::new();
        }

        let entry = history
            .search(SearchQuery::last_with_prefix(line.to_string(), None))
            .ok()
            .and_then(|results| results.into_iter().next());

        let Some(entry) = entry else {
            return String::new();
        };
        let Some(rest) = entry.command_line.strip_prefix(line) else {
            return String::new();
        };
        if rest.is_empty() {
            return String::new();
        }

        self.current_hint = rest.to_string();
        if use_ansi_coloring {
            self.style.paint(rest).to_string()
        } else {
            rest.to_string()
        }
    }

    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    /// First word of the pending hint, including its leading whitespace.
    fn next_hint_token(&self) -> String {
        let trimmed = self.current_hint.trim_start();
        let leading = self.current_hint.len() - trimmed.len();
        let word_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        self.current_hint[..leading + word_end].to_string()
    }
}
