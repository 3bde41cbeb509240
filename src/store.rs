//! An in-memory hierarchical key/value tree and its durable text format
//!
//! The [`Node`] knows nothing about series or counters. It is a plain tree
//! of named nodes, each holding an ordered mapping of string keys to string
//! values and an ordered list of child nodes.

mod node;
/// The brace-delimited durable text format.
pub mod text;

pub use node::Node;

/// The fixed name of the persisted root node.
pub const ROOT_NAME: &str = "PROJECTS";

/// Parses a serialized tree if present; otherwise returns a fresh empty root.
///
/// Malformed input never raises: unparsable sections are skipped
/// best-effort, and input with no parsable node at all yields a new empty
/// root named [`ROOT_NAME`].
#[must_use]
pub fn load_or_create(input: Option<&str>) -> Node {
    input
        .and_then(text::parse)
        .unwrap_or_else(|| Node::new(ROOT_NAME))
}
