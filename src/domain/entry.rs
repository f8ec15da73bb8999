//! Journal entries and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title of the entry shown on first run
pub const DEFAULT_SEED_TITLE: &str = "Ei você...";

/// Description of the entry shown on first run
pub const DEFAULT_SEED_DESCRIPTION: &str = "Como você está?";

/// Id of the entry shown on first run
pub const DEFAULT_SEED_ID: &str = "1";

/// Opaque, immutable entry identifier.
///
/// Generated ids are the decimal number of milliseconds since the Unix epoch
/// at creation time, but any string read back from storage is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    pub fn from_millis(millis: i64) -> Self {
        EntryId(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::new(s)
    }
}

/// A single journal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
}

impl Entry {
    pub fn new(id: EntryId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Entry {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// The built-in first-run entry
    pub fn default_seed() -> Self {
        Entry::new(
            EntryId::new(DEFAULT_SEED_ID),
            DEFAULT_SEED_TITLE,
            DEFAULT_SEED_DESCRIPTION,
        )
    }
}
