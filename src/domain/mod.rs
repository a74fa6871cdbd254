//! Domain layer - Core values
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod app_id;
pub mod config;
pub mod error;
pub mod options;
pub mod settings;
pub mod telemetry;

// Re-export common types
pub use app_id::AppId;
pub use config::CliConfig;
pub use error::*;
pub use options::{parse_opts, Options};
pub use settings::{APP_SETTING, DEFAULT_SETTINGS_DIR};
pub use telemetry::{CrashReport, TrackEvent};
