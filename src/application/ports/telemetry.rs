//! Telemetry port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::telemetry::{CrashReport, TrackEvent};

/// Telemetry transmission errors
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    #[error("Telemetry request failed: {0}")]
    RequestFailed(String),

    #[error("Telemetry rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Port for analytics event tracking
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Send one event.
    ///
    /// # Arguments
    /// * `event` - The event to track
    async fn track(&self, event: &TrackEvent) -> Result<(), TelemetryError>;
}

/// Port for crash/error reporting
#[async_trait]
pub trait CrashReporter: Send + Sync {
    /// Report an error tagged with the report's id.
    async fn report(&self, report: &CrashReport) -> Result<(), TelemetryError>;
}

/// Blanket implementation for boxed analytics sinks
#[async_trait]
impl AnalyticsSink for Box<dyn AnalyticsSink> {
    async fn track(&self, event: &TrackEvent) -> Result<(), TelemetryError> {
        self.as_ref().track(event).await
    }
}

/// Blanket implementation for boxed crash reporters
#[async_trait]
impl CrashReporter for Box<dyn CrashReporter> {
    async fn report(&self, report: &CrashReport) -> Result<(), TelemetryError> {
        self.as_ref().report(report).await
    }
}
