//! Syntax highlighter driven by the command index
//!
//! Words are classified by vocabulary alone: a word is a top-level command,
//! a sub-command, a command option or a global option if the index names it
//! anywhere in that role. Whitespace is preserved so the styled text always
//! matches the buffer.

use std::collections::HashSet;

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::index::CommandIndex;

/// Role of a word in the command index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordKind {
    Command,
    SubCommand,
    Option,
    GlobalOption,
    Other,
}

impl WordKind {
    fn style(self) -> Style {
        match self {
            WordKind::Command => Color::Yellow.bold(),
            WordKind::SubCommand => Color::Cyan.into(),
            WordKind::Option => Color::Green.into(),
            WordKind::GlobalOption => Color::Magenta.into(),
            WordKind::Other => Style::default(),
        }
    }
}

/// Highlighter for command lines of the wrapped CLI
pub struct IndexHighlighter {
    commands: HashSet<String>,
    sub_commands: HashSet<String>,
    options: HashSet<String>,
    global_options: HashSet<String>,
    enabled: bool,
}

impl IndexHighlighter {
    /// Build the vocabulary from every node of the index
    ///
    /// # Arguments
    /// * `index` - Command index
    /// * `enabled` - When false, lines are returned unstyled
    pub fn new(index: &CommandIndex, enabled: bool) -> Self {
        let mut highlighter = Self {
            commands: index.root().commands.iter().cloned().collect(),
            sub_commands: HashSet::new(),
            options: HashSet::new(),
            global_options: index.global_options().iter().cloned().collect(),
            enabled,
        };

        index.walk(|node, depth| {
            if depth == 0 {
                return;
            }
            highlighter.sub_commands.extend(node.commands.iter().cloned());
            highlighter.options.extend(node.arguments.iter().cloned());
        });
        highlighter
    }

    fn classify(&self, word: &str) -> WordKind {
        if word.starts_with("--") {
            if self.options.contains(word) {
                WordKind::Option
            } else if self.global_options.contains(word) {
                WordKind::GlobalOption
            } else {
                WordKind::Other
            }
        } else if self.commands.contains(word) {
            WordKind::Command
        } else if self.sub_commands.contains(word) {
            WordKind::SubCommand
        } else {
            WordKind::Other
        }
    }
}

impl Highlighter for IndexHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut rest = line;
        while !rest.is_empty() {
            let space_end = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            if space_end > 0 {
                styled.push((Style::default(), rest[..space_end].to_string()));
                rest = &rest[space_end..];
                continue;
            }
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            styled.push((self.classify(word).style(), word.to_string()));
            rest = &rest[word_end..];
        }
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CommandNode;

    fn index() -> CommandIndex {
        let ec2 = CommandNode::default()
            .with_command("describe-instances")
            .with_argument("--instance-ids", Default::default());
        let root = CommandNode::default()
            .with_child("ec2", ec2)
            .with_argument("--region", Default::default());
        CommandIndex::new("aws", root)
    }

    fn plain(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_preserves_whitespace() {
        let highlighter = IndexHighlighter::new(&index(), true);
        let line = "  ec2   describe-instances --region  us-east-1 ";
        assert_eq!(plain(&highlighter.highlight(line, 0)), line);
    }

    #[test]
    fn test_classification() {
        let highlighter = IndexHighlighter::new(&index(), true);
        assert_eq!(highlighter.classify("ec2"), WordKind::Command);
        assert_eq!(highlighter.classify("describe-instances"), WordKind::SubCommand);
        assert_eq!(highlighter.classify("--instance-ids"), WordKind::Option);
        assert_eq!(highlighter.classify("--region"), WordKind::GlobalOption);
        assert_eq!(highlighter.classify("i-123"), WordKind::Other);
    }

    #[test]
    fn test_styles_words() {
        let highlighter = IndexHighlighter::new(&index(), true);
        let styled = highlighter.highlight("ec2 describe-instances", 0);
        assert_eq!(styled.buffer[0].0, WordKind::Command.style());
        assert_eq!(styled.buffer[1].0, Style::default());
        assert_eq!(styled.buffer[2].0, WordKind::SubCommand.style());
    }

    #[test]
    fn test_disabled() {
        let highlighter = IndexHighlighter::new(&index(), false);
        let styled = highlighter.highlight("ec2 --region", 0);
        assert_eq!(styled.buffer.len(), 1);
        assert_eq!(styled.buffer[0], (Style::default(), "ec2 --region".to_string()));
    }
}
