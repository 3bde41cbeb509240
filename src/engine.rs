//! The session context and counter lifecycle
//!
//! A [`Session`] owns the ledger root for its lifetime: loaded once at
//! session start, mutated in place on each rollout, and flushed through its
//! gateway on explicit save. There is no ambient global state; all engine
//! operations, including the interactive-surface queries and the selection
//! pointer, live on the session. Single-writer: the host serializes all
//! calls.

use crate::{
    domain::{
        record::{LAUNCH_COUNT_KEY, SERIES_NAME_KEY},
        NumeralStyle, Record, SeriesId, SeriesRecord, SeriesTag,
    },
    gateway::{PersistenceGateway, SaveError},
    store::Node,
};

/// The outcome of a single rollout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollout {
    /// A series tag was found and the counter applied; the host should
    /// rename the vehicle to this.
    Renamed(String),
    /// No series tag was present, or the existing record is corrupt; the
    /// name stays as-is.
    Unchanged,
}

/// Errors from direct manual edits of a series record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    /// The given id has no entry in the ledger.
    #[error("no series with id '{0}'")]
    UnknownSeries(SeriesId),
    /// Launch counts start at one.
    #[error("launch count must be at least 1")]
    ZeroCount,
}

/// A single ledger session.
pub struct Session<G> {
    gateway: G,
    root: Node,
    selected: Option<SeriesId>,
}

impl<G: PersistenceGateway> Session<G> {
    /// Opens a session, loading the persisted tree through the gateway or
    /// starting from a fresh empty root when none is found.
    pub fn open(gateway: G) -> Self {
        let root = gateway.load().unwrap_or_else(|| {
            tracing::debug!("No persisted ledger found; starting empty");
            Node::new(crate::store::ROOT_NAME)
        });

        Self {
            gateway,
            root,
            selected: None,
        }
    }

    /// Applies the launch counter to a raw vehicle name.
    ///
    /// If the name carries a series tag, the series' counter is created at
    /// one or incremented, the stored label is refreshed to the tag's label
    /// (most-recent-wins), and the new display name is returned. Names
    /// without a tag, and series whose stored counter is missing,
    /// non-numeric, or already at the numeric ceiling, are left unchanged; a
    /// corrupt record is never repaired or guessed at.
    pub fn rollout(&mut self, raw_name: &str, style: NumeralStyle) -> Rollout {
        let Some(tag) = SeriesTag::parse(raw_name) else {
            return Rollout::Unchanged;
        };

        let count = match self.root.child(tag.id().as_str()) {
            Some(node) => match node
                .value(LAUNCH_COUNT_KEY)
                .map(str::parse::<u32>)
                .and_then(Result::ok)
                .and_then(|previous| previous.checked_add(1))
            {
                Some(next) => next,
                // Missing, non-numeric, or at the numeric ceiling: treat the
                // record as unusable and leave it untouched.
                None => {
                    tracing::warn!(
                        "Series '{}' has an unusable launch count; leaving '{raw_name}' unchanged",
                        tag.id()
                    );
                    return Rollout::Unchanged;
                }
            },
            None => 1,
        };

        let node = self.root.child_or_add(tag.id().as_str());
        node.set_value(LAUNCH_COUNT_KEY, count.to_string());
        node.set_value(SERIES_NAME_KEY, tag.display_label());

        let new_name = format!("{} {}", tag.display_label(), style.apply(count));
        tracing::info!("Series '{}' launch #{count}: {new_name}", tag.id());
        Rollout::Renamed(new_name)
    }

    /// Flushes the tree through the gateway.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the medium cannot be written; the
    /// in-memory tree is retained so the save can be retried.
    pub fn save(&mut self) -> Result<(), SaveError> {
        self.gateway.save(&self.root)
    }

    /// The ledger root.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// All children of the root, classified.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.root.children().iter().map(Record::decode)
    }

    /// All decoded series, in store order.
    #[must_use]
    pub fn series(&self) -> Vec<SeriesRecord> {
        self.records()
            .filter_map(|record| match record {
                Record::Series(series) => Some(series),
                Record::Opaque(_) => None,
            })
            .collect()
    }

    /// Looks up a single series by id.
    #[must_use]
    pub fn series_by_id(&self, id: &SeriesId) -> Option<SeriesRecord> {
        self.series()
            .into_iter()
            .find(|record| record.id() == id)
    }

    /// Overwrites a series' launch count, bypassing the increment logic.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownSeries`] if no series node with this id
    /// exists, or [`EditError::ZeroCount`] for a count of zero.
    pub fn set_launch_count(&mut self, id: &SeriesId, count: u32) -> Result<(), EditError> {
        if count == 0 {
            return Err(EditError::ZeroCount);
        }

        let node = self
            .root
            .child_mut(id.as_str())
            .ok_or_else(|| EditError::UnknownSeries(id.clone()))?;
        node.set_value(LAUNCH_COUNT_KEY, count.to_string());
        tracing::info!("Series '{id}' launch count manually set to {count}");
        Ok(())
    }

    /// The currently selected series, if the selection still resolves.
    #[must_use]
    pub fn selected(&self) -> Option<SeriesRecord> {
        let id = self.selected.as_ref()?;
        self.series_by_id(id)
    }

    /// Moves the selection forward through the series list ordered by
    /// display label, wrapping at the end. With nothing selected, selects
    /// the first entry.
    pub fn select_next(&mut self) -> Option<SeriesRecord> {
        self.page(true)
    }

    /// Moves the selection backward through the series list ordered by
    /// display label, wrapping at the start. With nothing selected, selects
    /// the last entry.
    pub fn select_prev(&mut self) -> Option<SeriesRecord> {
        self.page(false)
    }

    fn page(&mut self, forward: bool) -> Option<SeriesRecord> {
        let ordered = self.ordered_series();
        if ordered.is_empty() {
            self.selected = None;
            return None;
        }

        let len = ordered.len();
        let current = self
            .selected
            .as_ref()
            .and_then(|id| ordered.iter().position(|record| record.id() == id));

        let index = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        let record = ordered.into_iter().nth(index)?;
        self.selected = Some(record.id().clone());
        Some(record)
    }

    /// Series sorted the way the interactive surface pages through them:
    /// by display label (case-insensitive), then by id.
    #[must_use]
    pub fn ordered_series(&self) -> Vec<SeriesRecord> {
        let mut series = self.series();
        series.sort_by(|a, b| {
            a.display_label()
                .to_lowercase()
                .cmp(&b.display_label().to_lowercase())
                .then_with(|| a.id().cmp(b.id()))
        });
        series
    }

    /// Consumes the session, returning the gateway.
    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
