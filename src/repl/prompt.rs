//! Prompt showing the wrapped CLI and the active profile

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt for the shell REPL
pub struct ShellPrompt {
    /// Name of the wrapped CLI
    root: String,
    /// Profile exported to child processes, if any
    profile: Option<String>,
}

impl ShellPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `root` - Name of the wrapped CLI
    /// * `profile` - Active profile
    pub fn new(root: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            root: root.into(),
            profile,
        }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match &self.profile {
            Some(profile) => format!("{} ({profile})> ", self.root).into(),
            None => format!("{}> ", self.root).into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({prefix}reverse-search: {}) ", history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_profile() {
        let prompt = ShellPrompt::new("aws", None);
        assert_eq!(prompt.render_prompt_left(), "aws> ");
    }

    #[test]
    fn test_prompt_with_profile() {
        let prompt = ShellPrompt::new("aws", Some("prod".to_string()));
        assert_eq!(prompt.render_prompt_left(), "aws (prod)> ");
    }

    #[test]
    fn test_indicators() {
        let prompt = ShellPrompt::new("aws", None);
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
