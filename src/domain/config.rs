//! Versioned TOML configuration for a ledger root directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::NumeralStyle;

/// Configuration for a ledger root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File name of the primary store, relative to the ledger root.
    store: String,

    /// File name of a legacy store to import from when the primary store is
    /// absent. Import happens at most once per session, at load time.
    legacy_store: Option<String>,

    /// The numeral style applied when the caller does not choose one.
    style: NumeralStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            legacy_store: Some(default_legacy_store()),
            style: NumeralStyle::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The primary store file name.
    #[must_use]
    pub fn store(&self) -> &str {
        &self.store
    }

    /// The legacy store file name, if imports are enabled.
    #[must_use]
    pub fn legacy_store(&self) -> Option<&str> {
        self.legacy_store.as_deref()
    }

    /// The default numeral style.
    #[must_use]
    pub const fn style(&self) -> NumeralStyle {
        self.style
    }
}

fn default_store() -> String {
    "projects.ledger".to_string()
}

/// The settings file written by the original plugin; imported on first run.
fn default_legacy_store() -> String {
    "ProjectManager.settings".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_store")]
        store: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        legacy_store: Option<String>,

        #[serde(default)]
        style: NumeralStyle,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                store,
                legacy_store,
                style,
            } => Self {
                store,
                legacy_store,
                style,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            store: config.store,
            legacy_store: config.legacy_store,
            style: config.style,
        }
    }
}
