//! Command index: the static tree of commands, sub-commands and options
//!
//! The index is produced by an external indexer and loaded once at startup.
//! It is serialized as JSON with a single top-level key naming the root
//! command:
//!
//! ```json
//! {"aws": {"commands": ["ec2"], "arguments": ["--region"],
//!          "argument_metadata": {"--region": {"type_name": "string"}},
//!          "children": {"ec2": {"commands": ["describe-instances"]}}}}
//! ```
//!
//! Every field of a node is optional and defaults to empty, so traversal
//! code never has to special-case missing keys.

mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

pub use loader::{default_index_dir, index_filename, load_index_file};

static EMPTY_NODE: LazyLock<CommandNode> = LazyLock::new(CommandNode::default);

/// Metadata describing a single option of a command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentMetadata {
    /// Whether the option must be supplied
    #[serde(default)]
    pub required: bool,

    /// Type name shown next to the option (e.g. `string`, `list`)
    #[serde(default)]
    pub type_name: String,

    /// First line of the option's documentation
    #[serde(default, rename = "minidoc", alias = "short_doc")]
    pub short_doc: String,

    /// Example value suggested once the option has been typed
    #[serde(default)]
    pub example: String,

    /// Parameter name used by the underlying API
    #[serde(default)]
    pub api_name: String,
}

/// One node of the command tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandNode {
    /// Sub-command names in index order
    #[serde(default)]
    pub commands: Vec<String>,

    /// Options valid at this node, not including inherited global options
    #[serde(default)]
    pub arguments: Vec<String>,

    /// Per-option metadata keyed by option token (e.g. `--region`)
    #[serde(default)]
    pub argument_metadata: HashMap<String, ArgumentMetadata>,

    /// Child nodes keyed by sub-command name
    #[serde(default)]
    pub children: HashMap<String, CommandNode>,
}

impl CommandNode {
    /// The canonical empty node, returned whenever traversal misses.
    pub fn empty() -> &'static CommandNode {
        &EMPTY_NODE
    }

    /// Look up a direct child by sub-command name.
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.get(name)
    }

    /// Look up the metadata of an option declared at this node.
    pub fn metadata(&self, option: &str) -> Option<&ArgumentMetadata> {
        self.argument_metadata.get(option)
    }

    /// Check whether the node has nothing to offer.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.arguments.is_empty() && self.children.is_empty()
    }

    /// Add a sub-command, keeping `commands` and `children` in step.
    pub fn with_child(mut self, name: impl Into<String>, child: CommandNode) -> Self {
        let name = name.into();
        self.commands.push(name.clone());
        self.children.insert(name, child);
        self
    }

    /// Add a sub-command name that has no indexed child node.
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.commands.push(name.into());
        self
    }

    /// Add an option together with its metadata.
    pub fn with_argument(mut self, option: impl Into<String>, metadata: ArgumentMetadata) -> Self {
        let option = option.into();
        self.arguments.push(option.clone());
        self.argument_metadata.insert(option, metadata);
        self
    }
}

/// Counts describing the size of an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of nodes, the root included
    pub nodes: usize,
    /// Number of command names across all nodes
    pub commands: usize,
    /// Number of option tokens across all nodes
    pub arguments: usize,
    /// Depth of the deepest node (root is 0)
    pub max_depth: usize,
}

/// The loaded command tree together with its root name
#[derive(Debug, Clone, PartialEq)]
pub struct CommandIndex {
    root_name: String,
    root: CommandNode,
}

impl CommandIndex {
    /// Create an index from an already built root node.
    pub fn new(root_name: impl Into<String>, root: CommandNode) -> Self {
        Self {
            root_name: root_name.into(),
            root,
        }
    }

    /// Parse an index whose top-level object holds exactly one root.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut roots: HashMap<String, CommandNode> = serde_json::from_str(text)?;
        match roots.len() {
            0 => Err(IndexError::MissingRoot.into()),
            1 => {
                let (root_name, root) = roots.drain().next().ok_or(IndexError::MissingRoot)?;
                Ok(Self::new(root_name, root))
            }
            _ => {
                let mut names: Vec<String> = roots.into_keys().collect();
                names.sort();
                Err(IndexError::AmbiguousRoot(names).into())
            }
        }
    }

    /// Parse an index and select the named root.
    pub fn from_json_with_root(text: &str, root_name: &str) -> Result<Self> {
        let mut roots: HashMap<String, CommandNode> = serde_json::from_str(text)?;
        let root = roots
            .remove(root_name)
            .ok_or_else(|| IndexError::UnknownRoot(root_name.to_string()))?;
        Ok(Self::new(root_name, root))
    }

    /// Load an index from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = load_index_file(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Name of the root command (e.g. `aws`).
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The root node.
    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Options valid at every depth.
    pub fn global_options(&self) -> &[String] {
        &self.root.arguments
    }

    /// Metadata for a global option.
    pub fn global_metadata(&self, option: &str) -> Option<&ArgumentMetadata> {
        self.root.metadata(option)
    }

    /// Resolve a command path below the root.
    ///
    /// The path does not include the root name. Any miss yields
    /// [`CommandNode::empty`].
    pub fn node_at<S: AsRef<str>>(&self, path: &[S]) -> &CommandNode {
        let mut node = &self.root;
        for name in path {
            match node.child(name.as_ref()) {
                Some(child) => node = child,
                None => return CommandNode::empty(),
            }
        }
        node
    }

    /// Walk the whole tree and count its contents.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats::default();
        let mut pending = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            stats.nodes += 1;
            stats.commands += node.commands.len();
            stats.arguments += node.arguments.len();
            stats.max_depth = stats.max_depth.max(depth);
            pending.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        stats
    }

    /// Visit every node below the root together with its depth.
    pub(crate) fn walk(&self, mut visit: impl FnMut(&CommandNode, usize)) {
        let mut pending = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            visit(node, depth);
            pending.extend(node.children.values().map(|child| (child, depth + 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "aws": {
            "commands": ["ec2", "s3"],
            "arguments": ["--region", "--debug"],
            "argument_metadata": {
                "--region": {"required": false, "type_name": "string",
                             "minidoc": "The region to use", "example": "", "api_name": ""}
            },
            "children": {
                "ec2": {
                    "commands": ["describe-instances"],
                    "arguments": ["--instance-ids"],
                    "argument_metadata": {
                        "--instance-ids": {"type_name": "list", "short_doc": "Instance IDs",
                                           "api_name": "InstanceIds"}
                    },
                    "children": {"describe-instances": {}}
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_single_root() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        assert_eq!(index.root_name(), "aws");
        assert_eq!(index.root().commands, vec!["ec2", "s3"]);
        assert_eq!(index.global_options(), ["--region", "--debug"]);
    }

    #[test]
    fn test_metadata_defaults_and_alias() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        let region = index.global_metadata("--region").unwrap();
        assert_eq!(region.short_doc, "The region to use");

        let ids = index.node_at(&["ec2"]).metadata("--instance-ids").unwrap();
        assert_eq!(ids.short_doc, "Instance IDs");
        assert!(!ids.required);
        assert!(ids.example.is_empty());
        assert_eq!(ids.api_name, "InstanceIds");
    }

    #[test]
    fn test_missing_node_fields_default_to_empty() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        let leaf = index.node_at(&["ec2", "describe-instances"]);
        assert!(leaf.is_empty());
        assert!(leaf.argument_metadata.is_empty());
    }

    #[test]
    fn test_node_at_miss_returns_empty_node() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        let missing = index.node_at(&["ec2", "nope", "deeper"]);
        assert!(std::ptr::eq(missing, CommandNode::empty()));
        // "s3" is listed as a command but has no child node
        assert!(index.node_at(&["s3"]).is_empty());
    }

    #[test]
    fn test_empty_path_is_root() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        let path: [&str; 0] = [];
        assert_eq!(index.node_at(&path), index.root());
    }

    #[test]
    fn test_multiple_roots_are_ambiguous() {
        let err = CommandIndex::from_json_str(r#"{"b": {}, "a": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ShellError::Index(IndexError::AmbiguousRoot(ref names)) if names == &["a", "b"]
        ));
    }

    #[test]
    fn test_select_named_root() {
        let index = CommandIndex::from_json_with_root(r#"{"b": {}, "a": {"commands": ["x"]}}"#, "a")
            .unwrap();
        assert_eq!(index.root_name(), "a");
        assert_eq!(index.root().commands, vec!["x"]);

        assert!(CommandIndex::from_json_with_root("{}", "aws").is_err());
    }

    #[test]
    fn test_empty_object_has_no_root() {
        assert!(CommandIndex::from_json_str("{}").is_err());
    }

    #[test]
    fn test_stats() {
        let index = CommandIndex::from_json_str(SAMPLE).unwrap();
        let stats = index.stats();
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.commands, 3);
        assert_eq!(stats.arguments, 3);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_builder_keeps_commands_and_children_aligned() {
        let node = CommandNode::default()
            .with_child("ec2", CommandNode::default())
            .with_command("s3");
        assert_eq!(node.commands, vec!["ec2", "s3"]);
        assert!(node.child("ec2").is_some());
        assert!(node.child("s3").is_none());
    }
}
