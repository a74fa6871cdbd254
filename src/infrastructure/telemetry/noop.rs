//! No-op telemetry adapters
//!
//! Used when telemetry is disabled or no keys are configured.

use async_trait::async_trait;

use crate::application::ports::{AnalyticsSink, CrashReporter, TelemetryError};
use crate::domain::telemetry::{CrashReport, TrackEvent};

/// Analytics sink that drops every event
pub struct NoOpAnalytics;

impl NoOpAnalytics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for NoOpAnalytics {
    async fn track(&self, _event: &TrackEvent) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Crash reporter that drops every report
pub struct NoOpCrashReporter;

impl NoOpCrashReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCrashReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrashReporter for NoOpCrashReporter {
    async fn report(&self, _report: &CrashReport) -> Result<(), TelemetryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok() {
        let analytics = NoOpAnalytics::new();
        let crash = NoOpCrashReporter::new();
        assert!(analytics.track(&TrackEvent::new("cli-x", "id")).await.is_ok());
        assert!(crash.report(&CrashReport::new("id", "boom")).await.is_ok());
    }
}
