//! Context-aware completion over the command index
//!
//! This module provides:
//! - Fuzzy scoring and ranking of candidates
//! - An incremental engine that walks the command tree as the user types
//! - A full reparse used when an edit is not a single appended character
//! - Presentation of candidates with option metadata
//! - Completion sources for the line editor, including resource values
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use aws_shell::completion::ModelCompleter;
//! use aws_shell::index::{CommandIndex, CommandNode};
//!
//! let root = CommandNode::default().with_command("ec2").with_command("ecs");
//! let mut completer = ModelCompleter::new(Arc::new(CommandIndex::new("aws", root)));
//! assert_eq!(completer.autocomplete("e"), vec!["ec2", "ecs"]);
//! ```

mod engine;
mod fallback;
pub mod fuzzy;
mod presentation;
mod source;
mod state;

pub use engine::ModelCompleter;
pub use presentation::{present, replacement_offset, CompletionRecord};
pub use source::{CompletionSource, ModelSource, ResourceLookup, ServerSideSource, StaticResourceLookup};
pub use state::WalkState;
