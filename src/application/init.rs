//! Initialize journal use case

use crate::error::{DiarioError, Result};
use crate::infrastructure::config::CONFIG_FILE_NAME;
use crate::infrastructure::Config;
use std::fs;
use std::path::Path;
use tracing::info;

/// Create the storage root and write a default config.toml.
/// Fails if the root already has a config.
pub fn init(root: &Path) -> Result<()> {
    if root.join(CONFIG_FILE_NAME).exists() {
        return Err(DiarioError::AlreadyInitialized(root.to_path_buf()));
    }

    if !root.exists() {
        fs::create_dir_all(root)?;
    }

    Config::default().save_to_dir(root)?;
    info!(root = %root.display(), "initialized journal");

    Ok(())
}
