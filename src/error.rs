//! Error types for diario

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diario application
#[derive(Debug, Error)]
pub enum DiarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Could not determine a data directory")]
    DataDirNotFound,

    #[error("Already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Snapshot writer is no longer running")]
    WriterClosed,
}

impl DiarioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiarioError::Config(_)
            | DiarioError::TomlDeserialize(_)
            | DiarioError::TomlSerialize(_) => 2,
            DiarioError::DataDirNotFound => 3,
            DiarioError::AlreadyInitialized(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiarioError::DataDirNotFound => {
                "Could not determine a data directory\n\n\
                Suggestions:\n\
                • Pass --root <DIR> to choose where entries are stored\n\
                • Set DIARIO_ROOT environment variable to your journal path"
                    .to_string()
            }
            DiarioError::AlreadyInitialized(path) => {
                format!(
                    "Already initialized: {}\n\n\
                    Suggestions:\n\
                    • Edit {}/config.toml to change the seed entry\n\
                    • Use 'diario list' to see your entries",
                    path.display(),
                    path.display()
                )
            }
            DiarioError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Expected format:\n\
                    [seed]\n\
                    id = \"1\"\n\
                    title = \"...\"\n\
                    description = \"...\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiarioError
pub type Result<T> = std::result::Result<T, DiarioError>;
