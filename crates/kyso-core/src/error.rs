//! Error types for kyso-core

use std::path::PathBuf;

/// Result type for kyso-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kyso-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No candidate file is a Kyso config
    #[error(
        "No kyso.json, kyso.yml or kyso.yaml found in {}",
        .path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "the given files".into())
    )]
    ConfigNotFound { path: Option<PathBuf> },

    /// The config file exists but is not valid JSON/YAML
    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// The config parsed but is missing required fields
    #[error("Invalid config at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Filesystem error from kyso-fs
    #[error(transparent)]
    Fs(#[from] kyso_fs::Error),
}

