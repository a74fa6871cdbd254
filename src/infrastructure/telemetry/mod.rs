//! Telemetry adapters

mod noop;
mod rollbar;
mod segment;

pub use noop::{NoOpAnalytics, NoOpCrashReporter};
pub use rollbar::RollbarReporter;
pub use segment::SegmentAnalytics;

use crate::application::ports::{AnalyticsSink, CrashReporter};
use crate::application::TelemetryReporter;
use crate::domain::config::CliConfig;

/// Reporter over boxed sinks, as assembled from configuration
pub type DynTelemetryReporter = TelemetryReporter<Box<dyn AnalyticsSink>, Box<dyn CrashReporter>>;

/// Build a reporter from config, falling back to no-op sinks for
/// anything disabled or unkeyed
pub fn create_reporter(config: &CliConfig) -> DynTelemetryReporter {
    let analytics: Box<dyn AnalyticsSink> = match config.analytics_key() {
        Some(key) => Box::new(SegmentAnalytics::new(key)),
        None => Box::new(NoOpAnalytics::new()),
    };

    let crash: Box<dyn CrashReporter> = match config.crash_token() {
        Some(token) => Box::new(RollbarReporter::new(token)),
        None => Box::new(NoOpCrashReporter::new()),
    };

    TelemetryReporter::new(analytics, crash, config.id_or_default())
}
