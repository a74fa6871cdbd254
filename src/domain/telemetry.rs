//! Telemetry event value objects

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

/// Named analytics event for a single user/environment id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
    pub event: String,
    pub user_id: String,
    pub properties: Map<String, Value>,
}

impl TrackEvent {
    pub fn new(event: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            user_id: user_id.into(),
            properties: Map::new(),
        }
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Completed command, with elapsed time in milliseconds
    pub fn success(source: &str, user_id: &str, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_nanos() as f64 / 1_000_000.0;
        Self::new(source, user_id).with_property("elapsed", elapsed_ms)
    }

    /// Failed command, with the error message
    pub fn failure(source: &str, user_id: &str, message: &str) -> Self {
        Self::new(source, user_id).with_property("error", message)
    }
}

/// Error report for the crash sink, tagged with the user/environment id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    pub id: String,
    pub message: String,
}

impl CrashReport {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}
