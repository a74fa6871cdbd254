//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS (processes, files, clock) and the
//! Segment and Rollbar HTTP APIs.

pub mod config;
pub mod fs;
pub mod process;
pub mod settings;
pub mod tagger;
pub mod telemetry;

// Re-export adapters
pub use config::XdgConfigStore;
pub use fs::StdFileWriter;
pub use process::{SystemQuerier, SystemRunner};
pub use settings::DotDirSettings;
pub use tagger::UnixTimeTagger;
pub use telemetry::{
    create_reporter, DynTelemetryReporter, NoOpAnalytics, NoOpCrashReporter, RollbarReporter,
    SegmentAnalytics,
};
