//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers. Every side effect the CLI performs
//! (spawning processes, touching files, sending telemetry) goes
//! through one of them so tests can substitute fakes.

pub mod config;
pub mod file_writer;
pub mod process;
pub mod settings;
pub mod tagger;
pub mod telemetry;

// Re-export common types
pub use config::ConfigStore;
pub use file_writer::FileWriter;
pub use process::{ProcessError, ProcessQuerier, ProcessRunner};
pub use settings::{SettingsError, SettingsStore};
pub use tagger::Tagger;
pub use telemetry::{AnalyticsSink, CrashReporter, TelemetryError};
