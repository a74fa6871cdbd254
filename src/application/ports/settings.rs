//! Project settings port interface

use std::path::PathBuf;

use thiserror::Error;

/// Settings errors. Only writes can fail.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to write setting {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Port for small named values persisted per project.
pub trait SettingsStore: Send + Sync {
    /// Look up a setting.
    ///
    /// # Returns
    /// None when the setting is absent or unreadable, otherwise the
    /// trimmed value (possibly empty)
    fn lookup(&self, name: &str) -> Option<String>;

    /// Persist `value` verbatim under `name`.
    ///
    /// The settings directory must already exist.
    fn write(&self, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Read a setting, empty when absent. Never fails.
    fn read(&self, name: &str) -> String {
        self.lookup(name).unwrap_or_default()
    }
}

/// Blanket implementation for boxed settings stores
impl SettingsStore for Box<dyn SettingsStore> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.as_ref().lookup(name)
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.as_ref().write(name, value)
    }
}
