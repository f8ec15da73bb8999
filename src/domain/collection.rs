//! Ordered entry collection and the add/remove operations on it

use crate::domain::{Entry, EntryId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered set of all entries, in display order.
///
/// Ids are unique within a collection. Operations never mutate `self`; they
/// return the next version of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// Build a collection from entries in order.
    /// Later entries reusing an earlier id are dropped.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        Collection { entries }
    }

    /// Single-entry collection used on first run
    pub fn seeded(seed: Entry) -> Self {
        Collection {
            entries: vec![seed],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Append a new entry stamped with the current time.
    /// Empty title and description are accepted.
    pub fn add(&self, title: &str, description: &str) -> Collection {
        self.add_at(Utc::now().timestamp_millis(), title, description)
    }

    /// Append a new entry whose id is derived from `now_millis`
    pub fn add_at(&self, now_millis: i64, title: &str, description: &str) -> Collection {
        let id = self.next_id(now_millis);
        let mut entries = self.entries.clone();
        entries.push(Entry::new(id, title, description));
        Collection { entries }
    }

    /// Every entry except the one with `id`. Unknown ids leave the
    /// collection unchanged.
    pub fn remove(&self, id: &EntryId) -> Collection {
        Collection {
            entries: self
                .entries
                .iter()
                .filter(|e| &e.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Timestamp id, bumped forward one millisecond at a time while it
    /// collides with an existing entry.
    fn next_id(&self, now_millis: i64) -> EntryId {
        let mut candidate = now_millis;
        loop {
            let id = EntryId::from_millis(candidate);
            if !self.contains(&id) {
                return id;
            }
            candidate += 1;
        }
    }
}

impl From<Vec<Entry>> for Collection {
    fn from(entries: Vec<Entry>) -> Self {
        Collection::from_entries(entries)
    }
}

impl From<Collection> for Vec<Entry> {
    fn from(collection: Collection) -> Self {
        collection.entries
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
