//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when a working directory cannot be made absolute
#[derive(Debug, Error)]
#[error("Cannot resolve directory \"{}\": {source}", path.display())]
pub struct PathResolutionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
