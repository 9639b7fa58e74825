//! Turning completion strings into display records

use super::engine::ModelCompleter;

/// A single completion offered to the line editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Text inserted on acceptance
    pub text: String,

    /// Label shown in the menu
    pub display: String,

    /// Secondary label shown next to `display`
    pub display_meta: String,

    /// Where the replacement starts, in characters relative to the cursor
    /// (`0` or negative)
    pub start_position: isize,
}

impl CompletionRecord {
    /// A record with no extra decoration.
    pub fn plain(text: impl Into<String>, start_position: isize) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            text,
            display_meta: String::new(),
            start_position,
        }
    }
}

/// Length of the word being replaced, as a non-positive offset.
pub fn replacement_offset(text: &str) -> isize {
    if text.is_empty() || text.ends_with(char::is_whitespace) {
        return 0;
    }
    let word = text.split_whitespace().last().unwrap_or_default();
    -(word.chars().count() as isize)
}

/// Decorate completion strings with option metadata.
///
/// Options that the current node (or, below the root, the global option
/// set) describes get a `(required)` marker and a `[type] doc` meta line.
/// Everything else is passed through as plain text.
pub fn present(completer: &ModelCompleter, text: &str, completions: Vec<String>) -> Vec<CompletionRecord> {
    let start_position = replacement_offset(text);
    completions
        .into_iter()
        .map(|completion| match completer.option_metadata(&completion) {
            Some(metadata) => {
                let display = if metadata.required {
                    format!("{completion} (required)")
                } else {
                    completion.clone()
                };
                CompletionRecord {
                    display,
                    display_meta: format!("[{}] {}", metadata.type_name, metadata.short_doc),
                    text: completion,
                    start_position,
                }
            }
            None => CompletionRecord::plain(completion, start_position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::index::{ArgumentMetadata, CommandIndex, CommandNode};

    fn completer() -> ModelCompleter {
        let run = CommandNode::default()
            .with_argument(
                "--image-id",
                ArgumentMetadata {
                    required: true,
                    type_name: "string".to_string(),
                    short_doc: "The ID of the AMI".to_string(),
                    ..ArgumentMetadata::default()
                },
            )
            .with_argument(
                "--dry-run",
                ArgumentMetadata {
                    type_name: "boolean".to_string(),
                    ..ArgumentMetadata::default()
                },
            );
        let ec2 = CommandNode::default().with_child("run-instances", run);
        let root = CommandNode::default().with_child("ec2", ec2).with_argument(
            "--region",
            ArgumentMetadata {
                type_name: "string".to_string(),
                short_doc: "The region to use".to_string(),
                ..ArgumentMetadata::default()
            },
        );
        ModelCompleter::new(Arc::new(CommandIndex::new("aws", root)))
    }

    #[test]
    fn test_replacement_offset() {
        assert_eq!(replacement_offset(""), 0);
        assert_eq!(replacement_offset("ec2 "), 0);
        assert_eq!(replacement_offset("ec2 desc"), -4);
        assert_eq!(replacement_offset("ec2 ét"), -2);
    }

    #[test]
    fn test_required_option_is_marked() {
        let mut completer = completer();
        let text = "ec2 run-instances --i";
        let completions = completer.autocomplete(text);
        let records = present(&completer, text, completions);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "--image-id");
        assert_eq!(records[0].display, "--image-id (required)");
        assert_eq!(records[0].display_meta, "[string] The ID of the AMI");
        assert_eq!(records[0].start_position, -3);
    }

    #[test]
    fn test_optional_and_global_options() {
        let mut completer = completer();
        let text = "ec2 run-instances --";
        let completions = completer.autocomplete(text);
        let records = present(&completer, text, completions);

        let dry_run = records.iter().find(|r| r.text == "--dry-run").unwrap();
        assert_eq!(dry_run.display, "--dry-run");
        assert_eq!(dry_run.display_meta, "[boolean] ");

        let region = records.iter().find(|r| r.text == "--region").unwrap();
        assert_eq!(region.display_meta, "[string] The region to use");
    }

    #[test]
    fn test_commands_are_plain() {
        let mut completer = completer();
        let completions = completer.autocomplete("e");
        let records = present(&completer, "e", completions);
        assert_eq!(records, vec![CompletionRecord::plain("ec2", -1)]);
    }
}
