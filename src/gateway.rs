//! Persistence backends for the ledger tree
//!
//! The engine treats persistence as `load() -> tree-or-absent` and
//! `save(tree) -> success/failure`; the medium behind that interface is
//! interchangeable. [`FileGateway`] stores the tree in a standalone file and
//! can import from a legacy location; [`MemoryGateway`] keeps the serialized
//! form in memory, standing in for a store embedded in a host save file.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::store::{self, Node, ROOT_NAME};

/// Loads and saves the ledger root to some durable medium.
pub trait PersistenceGateway {
    /// Loads the persisted tree, or `None` if the medium holds no tree.
    ///
    /// Absence is expected on first run and is not an error; the caller
    /// proceeds with a fresh root.
    fn load(&self) -> Option<Node>;

    /// Writes the tree to the medium.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the medium cannot be written. The caller
    /// keeps the in-memory tree so the flush can be retried later.
    fn save(&mut self, root: &Node) -> Result<(), SaveError>;
}

/// Error returned when the ledger cannot be flushed to its medium.
#[derive(Debug, thiserror::Error)]
#[error("failed to save ledger")]
pub struct SaveError(#[from] io::Error);

/// A gateway backed by a standalone file.
///
/// When the primary file holds no tree, an optional legacy location is
/// consulted once; an imported legacy tree has its root renamed to the
/// canonical name before use. Saves only ever touch the primary file.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
}

impl FileGateway {
    /// Creates a gateway over the given primary file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            legacy_path: None,
        }
    }

    /// Enables the one-time legacy import from the given file.
    #[must_use]
    pub fn with_legacy(mut self, path: PathBuf) -> Self {
        self.legacy_path = Some(path);
        self
    }

    /// The primary file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_tree(path: &Path) -> Option<Node> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                // Availability over strictness: an unreadable file is treated
                // the same as an absent one.
                tracing::warn!("Failed to read ledger at {}: {e}", path.display());
                return None;
            }
        };

        let tree = store::text::parse(&content);
        if tree.is_none() {
            tracing::warn!("No parsable tree in {}", path.display());
        }
        tree
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self) -> Option<Node> {
        if let Some(root) = Self::read_tree(&self.path) {
            tracing::debug!("Loaded ledger from {}", self.path.display());
            return Some(root);
        }

        let legacy = self.legacy_path.as_deref()?;
        let mut root = Self::read_tree(legacy)?;
        root.rename(ROOT_NAME);
        tracing::info!("Imported legacy ledger from {}", legacy.display());
        Some(root)
    }

    fn save(&mut self, root: &Node) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, store::text::serialize(root))?;
        tracing::debug!("Saved ledger to {}", self.path.display());
        Ok(())
    }
}

/// A gateway holding the serialized tree in memory.
///
/// Stands in for a store embedded in a host-managed save blob, and doubles
/// as the test backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryGateway {
    buffer: Option<String>,
}

impl MemoryGateway {
    /// Creates an empty gateway: the first load finds nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: None }
    }

    /// Creates a gateway pre-seeded with serialized content.
    #[must_use]
    pub const fn with_contents(contents: String) -> Self {
        Self {
            buffer: Some(contents),
        }
    }

    /// The serialized form of the last saved tree, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.buffer.as_deref()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Option<Node> {
        self.buffer.as_deref().and_then(store::text::parse)
    }

    fn save(&mut self, root: &Node) -> Result<(), SaveError> {
        self.buffer = Some(store::text::serialize(root));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sample_root() -> Node {
        let mut root = Node::new(ROOT_NAME);
        let child = root.add_child("Atlas");
        child.set_value("launchCount", "2");
        child.set_value("seriesName", "Atlas");
        root
    }

    #[test]
    fn file_gateway_round_trips() {
        let tmp = TempDir::new().unwrap();
        let mut gateway = FileGateway::new(tmp.path().join("projects.ledger"));

        assert!(gateway.load().is_none());

        let root = sample_root();
        gateway.save(&root).unwrap();
        assert_eq!(gateway.load().unwrap(), root);
    }

    #[test]
    fn file_gateway_creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let mut gateway = FileGateway::new(tmp.path().join("nested/dir/projects.ledger"));

        gateway.save(&sample_root()).unwrap();
        assert!(gateway.load().is_some());
    }

    #[test]
    fn unparsable_primary_is_treated_as_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.ledger");
        std::fs::write(&path, "}} nothing useful").unwrap();

        assert!(FileGateway::new(path).load().is_none());
    }

    #[test]
    fn legacy_import_renames_the_root() {
        let tmp = TempDir::new().unwrap();
        let legacy_path = tmp.path().join("ProjectManager.settings");
        std::fs::write(
            &legacy_path,
            "PROJECTMANAGER\n{\n  Atlas\n  {\n    launchCount = 4\n  }\n}\n",
        )
        .unwrap();

        let gateway = FileGateway::new(tmp.path().join("projects.ledger")).with_legacy(legacy_path);

        let root = gateway.load().unwrap();
        assert_eq!(root.name(), ROOT_NAME);
        assert_eq!(root.child("Atlas").unwrap().value("launchCount"), Some("4"));
    }

    #[test]
    fn primary_wins_over_legacy() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("projects.ledger");
        let legacy = tmp.path().join("old.settings");
        std::fs::write(&primary, "PROJECTS\n{\n  fromPrimary = yes\n}\n").unwrap();
        std::fs::write(&legacy, "OLD\n{\n  fromLegacy = yes\n}\n").unwrap();

        let root = FileGateway::new(primary).with_legacy(legacy).load().unwrap();
        assert_eq!(root.value("fromPrimary"), Some("yes"));
    }

    #[test]
    fn save_to_an_unwritable_location_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "a plain file, not a directory").unwrap();

        let mut gateway = FileGateway::new(blocker.join("projects.ledger"));
        assert!(gateway.save(&sample_root()).is_err());
    }

    #[test]
    fn memory_gateway_round_trips() {
        let mut gateway = MemoryGateway::new();
        assert!(gateway.load().is_none());

        let root = sample_root();
        gateway.save(&root).unwrap();
        assert_eq!(gateway.load().unwrap(), root);
        assert!(gateway.contents().unwrap().contains("Atlas"));
    }
}
