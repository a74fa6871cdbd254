//! Segment analytics adapter

use async_trait::async_trait;

use crate::application::ports::{AnalyticsSink, TelemetryError};
use crate::domain::telemetry::TrackEvent;

/// Segment HTTP API base URL
const API_BASE_URL: &str = "https://api.segment.io";

/// Sends events to the Segment tracking API
pub struct SegmentAnalytics {
    write_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SegmentAnalytics {
    /// Create a sink authenticated with `write_key`
    pub fn new(write_key: impl Into<String>) -> Self {
        Self::with_base_url(write_key, API_BASE_URL)
    }

    /// Create a sink talking to a custom endpoint
    pub fn with_base_url(write_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            write_key: write_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn track_url(&self) -> String {
        format!("{}/v1/track", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AnalyticsSink for SegmentAnalytics {
    async fn track(&self, event: &TrackEvent) -> Result<(), TelemetryError> {
        let response = self
            .client
            .post(self.track_url())
            .basic_auth(&self.write_key, Some(""))
            .json(event)
            .send()
            .await
            .map_err(|e| TelemetryError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelemetryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
