//! Startup loading of the entry collection

use crate::domain::{Collection, Entry};
use crate::infrastructure::{KeyValueStore, SnapshotGateway};
use tracing::info;

/// Produces the initial collection: the stored snapshot if there is one,
/// the seed entry otherwise.
#[derive(Debug, Clone)]
pub struct EntryStore<S> {
    gateway: SnapshotGateway<S>,
    seed: Entry,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(gateway: SnapshotGateway<S>, seed: Entry) -> Self {
        EntryStore { gateway, seed }
    }

    /// Never fails. Missing or unreadable storage both fall back to the seed.
    pub fn load(&self) -> Collection {
        self.gateway.read().unwrap_or_else(|| {
            info!(seed = %self.seed.id, "no stored entries, starting from seed");
            Collection::seeded(self.seed.clone())
        })
    }

    pub fn into_gateway(self) -> SnapshotGateway<S> {
        self.gateway
    }
}
