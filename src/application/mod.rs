//! Application layer - Startup loading and the screen controller

pub mod app;
pub mod init;
pub mod store;

pub use app::{Action, App, Form, Outcome, Screen};
pub use store::EntryStore;

use crate::error::Result;
use crate::infrastructure::{Config, FileStore, SnapshotGateway};
use std::path::Path;

/// Open the journal stored under `root`, honouring its config.toml
pub fn open_journal(root: &Path) -> Result<App> {
    let config = Config::load_from_dir(root)?;
    let gateway = SnapshotGateway::new(FileStore::new(root.to_path_buf()));
    App::start(EntryStore::new(gateway, config.seed_entry()))
}
