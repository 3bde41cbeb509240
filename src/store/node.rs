use std::fmt;

/// A unit of the hierarchical store.
///
/// Values and children preserve insertion order so that a loaded tree can be
/// written back byte-identically. Writing an existing key replaces its value
/// in place, keeping the key's original position. Child names are only
/// required to be unique among siblings, and that pre-check is the caller's
/// responsibility: [`Node::add_child`] appends unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    values: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Creates an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the node. Used when importing a legacy tree under the
    /// canonical root name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Writes `value` under `key`, replacing any existing value in place.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.values.push((key, value));
        }
    }

    /// Appends a value without checking for an existing key.
    ///
    /// Only the text parser uses this: a loaded file with duplicate keys is
    /// preserved verbatim rather than silently deduplicated.
    pub(crate) fn push_value(&mut self, key: String, value: String) {
        self.values.push((key, value));
    }

    /// All values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the first direct child with the given name, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the first direct child with the given name, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Appends a new empty child and returns it.
    ///
    /// The caller must have already verified that no sibling carries this
    /// name; there is no implicit dedup.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut Self {
        self.children.push(Self::new(name));
        let index = self.children.len() - 1;
        &mut self.children[index]
    }

    /// Returns the named child, appending a new empty one if absent.
    pub fn child_or_add(&mut self, name: &str) -> &mut Self {
        if let Some(index) = self.children.iter().position(|child| child.name == name) {
            &mut self.children[index]
        } else {
            self.add_child(name)
        }
    }

    /// All direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::text::serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_upserts_in_place() {
        let mut node = Node::new("PROJECTS");
        node.set_value("a", "1");
        node.set_value("b", "2");
        node.set_value("a", "3");

        let values: Vec<_> = node.values().collect();
        assert_eq!(values, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn value_lookup_misses_return_none() {
        let node = Node::new("PROJECTS");
        assert_eq!(node.value("missing"), None);
    }

    #[test]
    fn children_preserve_insertion_order() {
        let mut node = Node::new("PROJECTS");
        node.add_child("Zulu");
        node.add_child("Alpha");

        let names: Vec<_> = node.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["Zulu", "Alpha"]);
    }

    #[test]
    fn child_lookup_by_name() {
        let mut node = Node::new("PROJECTS");
        node.add_child("Atlas").set_value("launchCount", "1");

        assert_eq!(node.child("Atlas").unwrap().value("launchCount"), Some("1"));
        assert!(node.child("Titan").is_none());
    }

    #[test]
    fn child_or_add_reuses_an_existing_child() {
        let mut node = Node::new("PROJECTS");
        node.add_child("Atlas").set_value("launchCount", "1");
        node.child_or_add("Atlas").set_value("launchCount", "2");

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.child("Atlas").unwrap().value("launchCount"), Some("2"));
    }
}
