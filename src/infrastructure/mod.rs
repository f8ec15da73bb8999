//! Infrastructure layer - Storage, snapshot persistence and configuration

pub mod config;
pub mod gateway;
pub mod kv_store;
pub mod writer;

pub use config::{resolve_root, Config};
pub use gateway::{SnapshotGateway, SNAPSHOT_KEY};
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use writer::SnapshotWriter;
