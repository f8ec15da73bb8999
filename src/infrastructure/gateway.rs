//! Snapshot persistence of the whole entry collection under one key

use crate::domain::Collection;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use tracing::{debug, error, warn};

/// Key holding the serialized collection
pub const SNAPSHOT_KEY: &str = "data";

/// Reads and writes the full collection as a JSON array under [`SNAPSHOT_KEY`]
#[derive(Debug, Clone)]
pub struct SnapshotGateway<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotGateway<S> {
    pub fn new(store: S) -> Self {
        SnapshotGateway { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the stored collection.
    ///
    /// A missing key is the normal first-run case and yields `None`. Storage
    /// errors and undecodable snapshots are logged and also yield `None`.
    pub fn read(&self) -> Option<Collection> {
        let text = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("no stored snapshot");
                return None;
            }
            Err(e) => {
                error!(error = %e, "failed to read stored snapshot");
                return None;
            }
        };

        match serde_json::from_str::<Collection>(&text) {
            Ok(collection) => {
                debug!(entries = collection.len(), "loaded stored snapshot");
                Some(collection)
            }
            Err(e) => {
                warn!(error = %e, "stored snapshot is not valid, ignoring it");
                None
            }
        }
    }

    /// Replace the stored snapshot with `collection`
    pub fn write(&self, collection: &Collection) -> Result<()> {
        let text = serde_json::to_string(collection)?;
        self.store.set(SNAPSHOT_KEY, &text)?;
        debug!(entries = collection.len(), "wrote snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::infrastructure::{FileStore, MemoryStore};
    use crate::logging::init_test_logging;
    use tempfile::TempDir;

    #[test]
    fn test_read_never_written_is_none() {
        let gateway = SnapshotGateway::new(MemoryStore::new());
        assert_eq!(gateway.read(), None);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let gateway = SnapshotGateway::new(MemoryStore::new());
        let collection = Collection::seeded(Entry::default_seed())
            .add_at(20, "Feliz", "Foi um bom dia")
            .add_at(30, "", "sem título");

        gateway.write(&collection).unwrap();
        assert_eq!(gateway.read(), Some(collection));
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let temp = TempDir::new().unwrap();
        let gateway = SnapshotGateway::new(FileStore::new(temp.path().to_path_buf()));

        gateway.write(&Collection::new()).unwrap();
        assert_eq!(gateway.read(), Some(Collection::new()));
        let raw = std::fs::read_to_string(temp.path().join("data.json")).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn test_write_replaces_previous_snapshot() {
        let gateway = SnapshotGateway::new(MemoryStore::new());
        let first = Collection::new().add_at(1, "a", "");
        let second = Collection::new().add_at(2, "b", "");

        gateway.write(&first).unwrap();
        gateway.write(&second).unwrap();
        assert_eq!(gateway.read(), Some(second));
    }

    #[test]
    fn test_corrupted_snapshot_reads_as_none() {
        init_test_logging();
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "{not json").unwrap();

        assert_eq!(SnapshotGateway::new(store).read(), None);
    }

    #[test]
    fn test_store_failure_reads_as_none() {
        init_test_logging();
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "[]").unwrap();
        store.set_failing(true);

        assert_eq!(SnapshotGateway::new(store).read(), None);
    }

    #[test]
    fn test_write_failure_is_returned() {
        let store = MemoryStore::new();
        store.set_failing(true);
        assert!(SnapshotGateway::new(store).write(&Collection::new()).is_err());
    }
}
