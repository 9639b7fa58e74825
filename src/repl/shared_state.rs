use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::completion::CompletionSource;

/// Completion source shared between the line editor and the executor
pub type SharedSource = Arc<Mutex<Box<dyn CompletionSource>>>;

/// Shared state between REPL and execution context.
#[derive(Clone)]
pub struct SharedState {
    /// Name of the wrapped CLI (root of the command index)
    root_name: Arc<str>,

    /// Active profile, exported to child processes
    profile: Arc<RwLock<Option<String>>>,

    /// Color output setting
    color_enabled: Arc<RwLock<bool>>,

    /// Completion source used by the line editor
    source: SharedSource,
}

impl SharedState {
    /// Create a new shared state.
    ///
    /// * `source` - Completion source driving the line editor
    pub fn new(source: Box<dyn CompletionSource>) -> Self {
        let root_name = Arc::from(source.completer().index().root_name());
        Self {
            root_name,
            profile: Arc::new(RwLock::new(None)),
            color_enabled: Arc::new(RwLock::new(true)),
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// Name of the wrapped CLI (e.g. `aws`).
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Lock the completion source.
    ///
    /// A poisoned lock is recovered.
    pub fn lock_source(&self) -> MutexGuard<'_, Box<dyn CompletionSource>> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get current profile.
    pub fn get_profile(&self) -> Option<String> {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set current profile.
    pub fn set_profile(&self, profile: Option<String>) {
        *self.profile.write().unwrap_or_else(PoisonError::into_inner) = profile;
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self
            .color_enabled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self
            .color_enabled
            .write()
            .unwrap_or_else(PoisonError::into_inner) = enabled;
    }

    /// Whether fuzzy completion is enabled.
    pub fn match_fuzzy(&self) -> bool {
        self.lock_source().completer().match_fuzzy()
    }

    /// Enable or disable fuzzy completion.
    pub fn set_match_fuzzy(&self, enabled: bool) {
        self.lock_source().set_match_fuzzy(enabled);
    }

    /// Tell the completion source that a line was submitted.
    pub fn on_command_submitted(&self) {
        self.lock_source().on_command_submitted();
    }
}
