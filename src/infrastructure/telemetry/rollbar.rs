//! Rollbar crash reporting adapter

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{CrashReporter, TelemetryError};
use crate::domain::telemetry::CrashReport;

/// Rollbar HTTP API base URL
const API_BASE_URL: &str = "https://api.rollbar.com";

// Request types for the Rollbar item API

#[derive(Debug, Serialize)]
struct ItemRequest<'a> {
    access_token: &'a str,
    data: ItemData<'a>,
}

#[derive(Debug, Serialize)]
struct ItemData<'a> {
    environment: &'a str,
    level: &'static str,
    platform: &'static str,
    body: ItemBody<'a>,
    custom: Custom<'a>,
}

#[derive(Debug, Serialize)]
struct ItemBody<'a> {
    message: Message<'a>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct Custom<'a> {
    id: &'a str,
}

/// Sends error reports to Rollbar
pub struct RollbarReporter {
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl RollbarReporter {
    /// Create a reporter using the `post_server_item` token
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a reporter talking to a custom endpoint
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn item_url(&self) -> String {
        format!("{}/api/1/item/", self.base_url.trim_end_matches('/'))
    }

    /// The report's id doubles as the Rollbar environment
    fn build_request<'a>(&'a self, report: &'a CrashReport) -> ItemRequest<'a> {
        ItemRequest {
            access_token: &self.token,
            data: ItemData {
                environment: &report.id,
                level: "error",
                platform: std::env::consts::OS,
                body: ItemBody {
                    message: Message {
                        body: &report.message,
                    },
                },
                custom: Custom { id: &report.id },
            },
        }
    }
}

#[async_trait]
impl CrashReporter for RollbarReporter {
    async fn report(&self, report: &CrashReport) -> Result<(), TelemetryError> {
        let body = self.build_request(report);

        let response = self
            .client
            .post(self.item_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| TelemetryError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TelemetryError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_has_correct_structure() {
        let reporter = RollbarReporter::new("token-1");
        let report = CrashReport::new("user-1", "docker: exit status 1");

        let json = serde_json::to_value(reporter.build_request(&report)).unwrap();

        assert_eq!(json["access_token"], "token-1");
        assert_eq!(json["data"]["environment"], "user-1");
        assert_eq!(json["data"]["level"], "error");
        assert_eq!(json["data"]["body"]["message"]["body"], "docker: exit status 1");
        assert_eq!(json["data"]["custom"]["id"], "user-1");
    }

    #[test]
    fn item_url_uses_base() {
        let reporter = RollbarReporter::with_base_url("t", "http://127.0.0.1:1234");
        assert_eq!(reporter.item_url(), "http://127.0.0.1:1234/api/1/item/");
    }
}
