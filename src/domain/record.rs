//! Typed view over ledger tree nodes.

use crate::{domain::series::SeriesId, store::Node};

/// Key under which a series node stores its launch counter.
pub const LAUNCH_COUNT_KEY: &str = "launchCount";

/// Key under which a series node stores its human-readable label.
pub const SERIES_NAME_KEY: &str = "seriesName";

/// A decoded series entry: id, label, and the number of launches so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRecord {
    id: SeriesId,
    display_label: String,
    launch_count: u32,
}

impl SeriesRecord {
    /// The normalized storage key.
    #[must_use]
    pub const fn id(&self) -> &SeriesId {
        &self.id
    }

    /// The most recently seen human-readable label.
    #[must_use]
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// How many launches this series has had.
    #[must_use]
    pub const fn launch_count(&self) -> u32 {
        self.launch_count
    }
}

/// A child of the ledger root, as the engine understands it.
///
/// Anything that does not decode as a series is carried opaquely: it
/// round-trips through load and save untouched, and the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// A well-formed series entry.
    Series(SeriesRecord),
    /// An entry the engine does not recognize, preserved verbatim.
    Opaque(&'a Node),
}

impl<'a> Record<'a> {
    /// Classifies a node.
    ///
    /// A node is a series when its name is a valid [`SeriesId`] and it
    /// carries both recognized keys with a numeric launch count. Everything
    /// else is opaque.
    #[must_use]
    pub fn decode(node: &'a Node) -> Self {
        let decoded = || {
            let id = SeriesId::new(node.name().to_string()).ok()?;
            let launch_count = node.value(LAUNCH_COUNT_KEY)?.parse().ok()?;
            let display_label = node.value(SERIES_NAME_KEY)?.to_string();
            Some(SeriesRecord {
                id,
                display_label,
                launch_count,
            })
        };

        decoded().map_or(Self::Opaque(node), Self::Series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_node(name: &str, count: &str, label: &str) -> Node {
        let mut node = Node::new(name);
        node.set_value(LAUNCH_COUNT_KEY, count);
        node.set_value(SERIES_NAME_KEY, label);
        node
    }

    #[test]
    fn well_formed_node_decodes_as_a_series() {
        let node = series_node("Falcon9", "17", "Falcon 9");
        let Record::Series(record) = Record::decode(&node) else {
            panic!("expected a series record");
        };
        assert_eq!(record.id().as_str(), "Falcon9");
        assert_eq!(record.display_label(), "Falcon 9");
        assert_eq!(record.launch_count(), 17);
    }

    #[test]
    fn non_numeric_count_is_opaque() {
        let node = series_node("Atlas", "seventeen", "Atlas");
        assert_eq!(Record::decode(&node), Record::Opaque(&node));
    }

    #[test]
    fn missing_keys_are_opaque() {
        let mut node = Node::new("Atlas");
        node.set_value(LAUNCH_COUNT_KEY, "3");
        assert_eq!(Record::decode(&node), Record::Opaque(&node));
    }

    #[test]
    fn unrecognizable_name_is_opaque() {
        let node = series_node("not a series id", "3", "whatever");
        assert_eq!(Record::decode(&node), Record::Opaque(&node));
    }
}
