//! Series identity: the bracketed tag in a raw vehicle name.

use std::{fmt, str::FromStr, sync::LazyLock};

use non_empty_string::NonEmptyString;
use regex::Regex;

/// Matches the first (shortest) bracketed span in a raw name.
static SERIES_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("this must never fail"));

/// A validated series key: non-empty, ASCII alphanumeric only.
///
/// Series ids are used as child-node names in the ledger tree, so they must
/// be stable regardless of incidental punctuation or spacing in the label
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeriesId(NonEmptyString);

impl SeriesId {
    /// Creates a new `SeriesId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdError` if the string is empty or contains characters
    /// other than ASCII letters and digits.
    pub fn new(s: String) -> Result<Self, InvalidIdError> {
        let non_empty = NonEmptyString::new(s.clone()).map_err(|_| InvalidIdError(s.clone()))?;

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidIdError(s));
        }

        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SeriesId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeriesId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string is not a valid series id.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid series id '{0}': must be non-empty and contain only ASCII letters and digits")]
pub struct InvalidIdError(String);

/// The series identity extracted from a raw vehicle name.
///
/// Carries both the storage key (`id`) and the human-readable label exactly
/// as the user most recently typed it (modulo whitespace normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesTag {
    id: SeriesId,
    display_label: String,
}

impl SeriesTag {
    /// Scans `raw_name` for the first bracketed span and derives the series
    /// identity from it.
    ///
    /// Returns `None` if there is no bracketed span, or if the span contains
    /// nothing that can serve as a storage key. Content after the first `]`
    /// is ignored.
    ///
    /// The display label is the span content with surrounding whitespace
    /// trimmed and internal whitespace runs collapsed, so `"[ Falcon  9 ]"`
    /// and `"[Falcon 9]"` belong to the same series and read the same.
    #[must_use]
    pub fn parse(raw_name: &str) -> Option<Self> {
        let span = SERIES_TAG.captures(raw_name)?.get(1)?.as_str();

        if span.is_empty() {
            return None;
        }

        let display_label = span.split_whitespace().collect::<Vec<_>>().join(" ");

        // Strip whitespace, then everything outside [0-9a-zA-Z].
        let key: String = span.chars().filter(char::is_ascii_alphanumeric).collect();
        let id = SeriesId::new(key).ok()?;

        Some(Self { id, display_label })
    }

    /// The normalized storage key.
    #[must_use]
    pub const fn id(&self) -> &SeriesId {
        &self.id
    }

    /// The human-readable series label.
    #[must_use]
    pub fn display_label(&self) -> &str {
        &self.display_label
    }
}
