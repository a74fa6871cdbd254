//! Command error type

use thiserror::Error;

use crate::application::ports::{ProcessError, SettingsError};
use crate::domain::error::{ConfigError, PathResolutionError};

/// Errors a command handler can return
#[derive(Debug, Error)]
pub enum CommandError {
    /// Show the command's help and exit with the usage code
    #[error("Invalid usage")]
    Usage,

    #[error(transparent)]
    Path(#[from] PathResolutionError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

impl CommandError {
    pub fn message(message: impl Into<String>) -> Self {
        CommandError::Message(message.into())
    }
}
