//! Command outcome reporting use case

use std::fmt::Display;
use std::time::Instant;

use crate::domain::telemetry::{CrashReport, TrackEvent};

use super::ports::{AnalyticsSink, CrashReporter, TelemetryError};

/// Best-effort reporting of command outcomes.
///
/// Failures to reach the analytics sink are forwarded to the crash
/// reporter; failures of the crash reporter are logged and dropped.
/// Neither ever reaches the caller.
pub struct TelemetryReporter<A, C>
where
    A: AnalyticsSink,
    C: CrashReporter,
{
    analytics: A,
    crash: C,
    id: String,
}

impl<A, C> TelemetryReporter<A, C>
where
    A: AnalyticsSink,
    C: CrashReporter,
{
    /// Create a reporter tagging everything with `id`
    pub fn new(analytics: A, crash: C, id: impl Into<String>) -> Self {
        Self {
            analytics,
            crash,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record a successful command started at `started`
    pub async fn success_event(&self, source: &str, started: Instant) {
        let event = TrackEvent::success(source, &self.id, started.elapsed());
        self.track(&event).await;
    }

    /// Record a failed command and report the error itself
    pub async fn error_event(&self, source: &str, error: &(dyn Display + Sync)) {
        let message = error.to_string();
        let event = TrackEvent::failure(source, &self.id, &message);
        self.track(&event).await;
        self.report(&message).await;
    }

    async fn track(&self, event: &TrackEvent) {
        if let Err(e) = self.analytics.track(event).await {
            tracing::debug!(event = %event.event, error = %e, "analytics delivery failed");
            self.report_transmission(&e).await;
        }
    }

    async fn report_transmission(&self, error: &TelemetryError) {
        self.report(&error.to_string()).await;
    }

    async fn report(&self, message: &str) {
        let report = CrashReport::new(&self.id, message);
        if let Err(e) = self.crash.report(&report).await {
            tracing::warn!(error = %e, "crash report delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // Mock implementations for testing
    #[derive(Clone, Default)]
    struct MockAnalytics {
        events: Arc<Mutex<Vec<TrackEvent>>>,
        fail: bool,
    }

    #[async_trait]
    impl AnalyticsSink for MockAnalytics {
        async fn track(&self, event: &TrackEvent) -> Result<(), TelemetryError> {
            if self.fail {
                return Err(TelemetryError::RequestFailed("connection refused".to_string()));
            }
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockCrash {
        reports: Arc<Mutex<Vec<CrashReport>>>,
        fail: bool,
    }

    #[async_trait]
    impl CrashReporter for MockCrash {
        async fn report(&self, report: &CrashReport) -> Result<(), TelemetryError> {
            self.reports.lock().unwrap().push(report.clone());
            if self.fail {
                return Err(TelemetryError::Rejected {
                    status: 500,
                    body: "down".to_string(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn success_tracks_elapsed() {
        let analytics = MockAnalytics::default();
        let crash = MockCrash::default();
        let reporter = TelemetryReporter::new(analytics.clone(), crash.clone(), "user-1");

        reporter.success_event("cli-build", Instant::now()).await;

        let events = analytics.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "cli-build");
        assert_eq!(events[0].user_id, "user-1");
        assert!(events[0].properties.contains_key("elapsed"));
        assert!(crash.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_tracks_and_reports() {
        let analytics = MockAnalytics::default();
        let crash = MockCrash::default();
        let reporter = TelemetryReporter::new(analytics.clone(), crash.clone(), "user-1");

        reporter.error_event("cli-build", &"docker: exit status 1").await;

        let events = analytics.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].properties.get("error").and_then(|v| v.as_str()),
            Some("docker: exit status 1")
        );

        let reports = crash.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0], CrashReport::new("user-1", "docker: exit status 1"));
    }

    #[tokio::test]
    async fn analytics_failure_goes_to_crash_sink() {
        let analytics = MockAnalytics {
            fail: true,
            ..Default::default()
        };
        let crash = MockCrash::default();
        let reporter = TelemetryReporter::new(analytics, crash.clone(), "user-1");

        reporter.success_event("cli-doctor", Instant::now()).await;

        let reports = crash.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].message.contains("connection refused"));
    }

    #[tokio::test]
    async fn error_event_reports_transmission_and_command_error() {
        let analytics = MockAnalytics {
            fail: true,
            ..Default::default()
        };
        let crash = MockCrash::default();
        let reporter = TelemetryReporter::new(analytics, crash.clone(), "user-1");

        reporter.error_event("cli-build", &"boom").await;

        let reports = crash.reports.lock().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].message.contains("connection refused"));
        assert_eq!(reports[1].message, "boom");
    }

    #[tokio::test]
    async fn crash_sink_failure_is_swallowed() {
        let crash = MockCrash {
            fail: true,
            ..Default::default()
        };
        let reporter = TelemetryReporter::new(MockAnalytics::default(), crash.clone(), "id");

        reporter.error_event("cli-build", &"boom").await;

        assert_eq!(crash.reports.lock().unwrap().len(), 1);
    }
}
