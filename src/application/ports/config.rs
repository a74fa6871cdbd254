//! Configuration port interface

use std::path::PathBuf;

use crate::domain::config::CliConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (may have None fields if file doesn't exist)
    fn load(&self) -> Result<CliConfig, ConfigError>;

    /// Save configuration to storage.
    ///
    /// # Arguments
    /// * `config` - The configuration to save
    fn save(&self, config: &CliConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize configuration file with defaults.
    /// Fails if file already exists.
    fn init(&self) -> Result<(), ConfigError>;
}
