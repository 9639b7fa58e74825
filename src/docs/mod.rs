//! Pre-rendered command documentation
//!
//! Documentation is generated ahead of time and stored as a JSON object
//! mapping dotted command names (`aws.ec2.describe-instances`) to rendered
//! text. Lookups never fail: unknown commands and options produce an empty
//! string.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IndexError, Result, ShellError};
use crate::index::load_index_file;

/// Source of rendered documentation keyed by dotted command name
pub trait DocSource {
    /// Full rendered text for a command, if known.
    fn lookup(&self, dotted: &str) -> Option<&str>;

    /// Command description: everything before the `SYNOPSIS` heading.
    fn extract_description(&self, dotted: &str) -> String {
        let Some(docs) = self.lookup(dotted) else {
            return String::new();
        };
        match docs.find("SYNOPSIS") {
            Some(end) if end > 0 => docs[..end].to_string(),
            _ => docs.to_string(),
        }
    }

    /// Documentation of one option, from its first mention after the
    /// `OPTIONS` heading up to the next option.
    fn extract_param(&self, dotted: &str, option: &str) -> String {
        let Some(docs) = self.lookup(dotted) else {
            return String::new();
        };
        let options_start = docs.find("OPTIONS").unwrap_or(0);
        let Some(offset) = docs[options_start..].find(option) else {
            return String::new();
        };
        let start = options_start + offset;
        let end = docs[start..]
            .find("  --")
            .map(|len| start + len)
            .unwrap_or(docs.len());
        docs[start..end].to_string()
    }
}

/// In-memory documentation index
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    entries: HashMap<String, String>,
}

impl DocIndex {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a JSON documentation index.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Load a documentation index, treating a missing file as empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        match load_index_file(path.as_ref()) {
            Ok(text) => {
                let index = Self::from_json_str(&text)?;
                debug!("Loaded {} documentation entries", index.len());
                Ok(index)
            }
            Err(ShellError::Index(IndexError::NotFound(path))) => {
                warn!("No documentation index at {path}");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocSource for DocIndex {
    fn lookup(&self, dotted: &str) -> Option<&str> {
        self.entries.get(dotted).map(String::as_str)
    }
}
