//! Completer for reedline - bridges the completion source to the menu

use reedline::{Completer, Span, Suggestion};

use crate::completion::CompletionRecord;

use super::shared_state::SharedState;

/// Completer handing the text before the cursor to the shared source
pub struct ShellCompleter {
    shared_state: SharedState,
}

impl ShellCompleter {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl Completer for ShellCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let before_cursor = &line[..pos.min(line.len())];
        let records = self.shared_state.lock_source().complete(before_cursor);

        records
            .into_iter()
            .map(|record| to_suggestion(before_cursor, record))
            .collect()
    }
}

/// Convert a record whose start is counted in characters back from the
/// cursor into a byte span of `before_cursor`.
fn to_suggestion(before_cursor: &str, record: CompletionRecord) -> Suggestion {
    let pos = before_cursor.len();
    let chars_back = record.start_position.unsigned_abs();
    let start = before_cursor
        .char_indices()
        .rev()
        .take(chars_back)
        .last()
        .map_or(pos, |(index, _)| index);

    Suggestion {
        description: describe(&record),
        value: record.text,
        span: Span::new(start, pos),
        append_whitespace: true,
        ..Suggestion::default()
    }
}

fn describe(record: &CompletionRecord) -> Option<String> {
    let marker = record
        .display
        .strip_prefix(record.text.as_str())
        .map(str::trim)
        .unwrap_or_default();

    let description = match (marker.is_empty(), record.display_meta.is_empty()) {
        (true, true) => return None,
        (false, true) => marker.to_string(),
        (true, false) => record.display_meta.clone(),
        (false, false) => format!("{marker} {}", record.display_meta),
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::completion::{ModelCompleter, ModelSource};
    use crate::index::{ArgumentMetadata, CommandIndex, CommandNode};

    fn completer() -> ShellCompleter {
        let ec2 = CommandNode::default()
            .with_command("describe-instances")
            .with_argument(
                "--instance-ids",
                ArgumentMetadata {
                    required: true,
                    type_name: "list".to_string(),
                    short_doc: "Instance IDs".to_string(),
                    ..Default::default()
                },
            );
        let root = CommandNode::default().with_child("ec2", ec2).with_command("ecs");
        let model = ModelCompleter::new(Arc::new(CommandIndex::new("aws", root)));
        ShellCompleter::new(SharedState::new(Box::new(ModelSource::new(model))))
    }

    #[test]
    fn test_top_level_completion() {
        let mut completer = completer();
        let suggestions = completer.complete("ec", 2);
        let values: Vec<_> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["ec2", "ecs"]);
        assert_eq!(suggestions[0].span, Span::new(0, 2));
        assert!(suggestions[0].description.is_none());
    }

    #[test]
    fn test_option_description() {
        let mut completer = completer();
        let suggestions = completer.complete("ec2 --inst", 10);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "--instance-ids");
        assert_eq!(suggestions[0].span, Span::new(4, 10));
        assert_eq!(
            suggestions[0].description.as_deref(),
            Some("(required) [list] Instance IDs")
        );
    }

    #[test]
    fn test_span_counts_characters() {
        let record = CompletionRecord::plain("ébc", -2);
        let suggestion = to_suggestion("x éb", record);
        assert_eq!(suggestion.span, Span::new(2, 5));
    }

    #[test]
    fn test_cursor_inside_line() {
        let mut completer = completer();
        let suggestions = completer.complete("ec2 describe-instances", 2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].span, Span::new(0, 2));
    }
}
