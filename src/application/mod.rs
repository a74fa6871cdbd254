//! Application layer - Use cases and port interfaces
//!
//! Contains the core operations and trait definitions
//! for external system interactions.

pub mod app_context;
pub mod ports;
pub mod telemetry;

// Re-export use cases
pub use app_context::{AppContext, AppContextResolver};
pub use telemetry::TelemetryReporter;
