//! Configuration management

use crate::domain::entry::{DEFAULT_SEED_DESCRIPTION, DEFAULT_SEED_ID, DEFAULT_SEED_TITLE};
use crate::domain::{Entry, EntryId};
use crate::error::{DiarioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the storage root
pub const ROOT_ENV_VAR: &str = "DIARIO_ROOT";

/// Config file name inside the storage root
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DATA_DIR_NAME: &str = "diario";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: SeedConfig,
}

/// Entry shown when nothing has been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            id: DEFAULT_SEED_ID.to_string(),
            title: DEFAULT_SEED_TITLE.to_string(),
            description: DEFAULT_SEED_DESCRIPTION.to_string(),
        }
    }
}

impl Config {
    /// Load config from config.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(DiarioError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| DiarioError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE_NAME), contents)?;

        Ok(())
    }

    pub fn seed_entry(&self) -> Entry {
        Entry::new(
            EntryId::new(self.seed.id.clone()),
            self.seed.title.clone(),
            self.seed.description.clone(),
        )
    }
}

/// Resolve the storage root.
/// An explicit path wins, then DIARIO_ROOT, then the platform data directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(root) = std::env::var_os(ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }

    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or(DiarioError::DataDirNotFound)
}
