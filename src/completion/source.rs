//! Completion sources consumed by the line editor
//!
//! A source owns a [`ModelCompleter`] and turns the raw candidate strings into
//! [`CompletionRecord`]s. The server-side variant adds resource values (for
//! example instance IDs) when the model has nothing to offer for an option.

use std::collections::HashMap;

use tracing::debug;

use super::engine::ModelCompleter;
use super::fuzzy;
use super::presentation::{present, replacement_offset, CompletionRecord};

/// Anything able to produce completion records for the text before the cursor
pub trait CompletionSource: Send {
    /// Complete the text typed so far.
    fn complete(&mut self, text_before_cursor: &str) -> Vec<CompletionRecord>;

    /// Signal that the current line was submitted.
    fn on_command_submitted(&mut self);

    /// Enable or disable fuzzy fallback.
    fn set_match_fuzzy(&mut self, enabled: bool);

    /// The underlying model completer.
    fn completer(&self) -> &ModelCompleter;
}

/// Completions from the command index alone
pub struct ModelSource {
    completer: ModelCompleter,
}

impl ModelSource {
    pub fn new(completer: ModelCompleter) -> Self {
        Self { completer }
    }
}

impl CompletionSource for ModelSource {
    fn complete(&mut self, text_before_cursor: &str) -> Vec<CompletionRecord> {
        let completions = self.completer.autocomplete(text_before_cursor);
        present(&self.completer, text_before_cursor, completions)
    }

    fn on_command_submitted(&mut self) {
        self.completer.on_command_submitted();
    }

    fn set_match_fuzzy(&mut self, enabled: bool) {
        self.completer.set_match_fuzzy(enabled);
    }

    fn completer(&self) -> &ModelCompleter {
        &self.completer
    }
}

/// Lookup of live resource values for an API parameter
pub trait ResourceLookup: Send {
    /// Candidate values for `param` of `service`/`operation`, or `None` when
    /// the parameter cannot be completed.
    fn candidate_values(&self, service: &str, operation: &str, param: &str) -> Option<Vec<String>>;
}

/// In-memory [`ResourceLookup`] keyed by `(service, operation, param)`
#[derive(Debug, Clone, Default)]
pub struct StaticResourceLookup {
    values: HashMap<(String, String, String), Vec<String>>,
}

impl StaticResourceLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register candidate values for a parameter.
    pub fn with_values<I, S>(mut self, service: &str, operation: &str, param: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            (service.to_string(), operation.to_string(), param.to_string()),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl ResourceLookup for StaticResourceLookup {
    fn candidate_values(&self, service: &str, operation: &str, param: &str) -> Option<Vec<String>> {
        self.values
            .get(&(service.to_string(), operation.to_string(), param.to_string()))
            .cloned()
    }
}

/// Model completions, falling back to resource values for option arguments
pub struct ServerSideSource<L: ResourceLookup> {
    model: ModelSource,
    lookup: L,
}

impl<L: ResourceLookup> ServerSideSource<L> {
    pub fn new(completer: ModelCompleter, lookup: L) -> Self {
        Self {
            model: ModelSource::new(completer),
            lookup,
        }
    }

    fn resource_completions(&self, text_before_cursor: &str) -> Vec<CompletionRecord> {
        let completer = self.model.completer();
        let path = completer.command_path();
        if completer.last_option().is_empty() || path.len() != 3 {
            return Vec::new();
        }

        let service = match path[1].as_str() {
            // The s3api commands are backed by the s3 service model.
            "s3api" => "s3",
            other => other,
        };
        let operation = path[2].as_str();
        let Some(param) = completer
            .option_metadata(completer.last_option())
            .map(|metadata| metadata.api_name.as_str())
            .filter(|name| !name.is_empty())
        else {
            return Vec::new();
        };

        debug!("Trying server side completion for {service}, {operation}, {param}");
        let Some(mut results) = self.lookup.candidate_values(service, operation, param) else {
            return Vec::new();
        };
        debug!("Server side results for {param}: {results:?}");

        let start_position = replacement_offset(text_before_cursor);
        if start_position != 0 {
            let word = text_before_cursor.split_whitespace().last().unwrap_or_default();
            results = fuzzy::rank(word, &results);
        }
        results
            .into_iter()
            .map(|value| CompletionRecord::plain(value, start_position))
            .collect()
    }
}

impl<L: ResourceLookup> CompletionSource for ServerSideSource<L> {
    fn complete(&mut self, text_before_cursor: &str) -> Vec<CompletionRecord> {
        let records = self.model.complete(text_before_cursor);
        if !records.is_empty() {
            return records;
        }
        self.resource_completions(text_before_cursor)
    }

    fn on_command_submitted(&mut self) {
        self.model.on_command_submitted();
    }

    fn set_match_fuzzy(&mut self, enabled: bool) {
        self.model.set_match_fuzzy(enabled);
    }

    fn completer(&self) -> &ModelCompleter {
        self.model.completer()
    }
}
