//! CLI configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::settings::DEFAULT_SETTINGS_DIR;

/// Identifier reported with telemetry when none is configured
pub const DEFAULT_TELEMETRY_ID: &str = "anonymous";

/// CLI configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// User/environment identifier attached to telemetry
    pub id: Option<String>,
    pub telemetry: Option<bool>,
    pub segment_write_key: Option<String>,
    pub rollbar_token: Option<String>,
    /// Hidden per-project directory holding settings files
    pub settings_dir: Option<String>,
}

impl CliConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            id: None,
            telemetry: Some(true),
            segment_write_key: None,
            rollbar_token: None,
            settings_dir: Some(DEFAULT_SETTINGS_DIR.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            id: other.id.or(self.id),
            telemetry: other.telemetry.or(self.telemetry),
            segment_write_key: other.segment_write_key.or(self.segment_write_key),
            rollbar_token: other.rollbar_token.or(self.rollbar_token),
            settings_dir: other.settings_dir.or(self.settings_dir),
        }
    }

    pub fn id_or_default(&self) -> &str {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_TELEMETRY_ID)
    }

    pub fn telemetry_or_default(&self) -> bool {
        self.telemetry.unwrap_or(true)
    }

    pub fn settings_dir_or_default(&self) -> &str {
        self.settings_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .unwrap_or(DEFAULT_SETTINGS_DIR)
    }

    /// Analytics write key, when telemetry is on
    pub fn analytics_key(&self) -> Option<&str> {
        self.segment_write_key
            .as_deref()
            .filter(|key| self.telemetry_or_default() && !key.is_empty())
    }

    /// Crash reporting token, when telemetry is on
    pub fn crash_token(&self) -> Option<&str> {
        self.rollbar_token
            .as_deref()
            .filter(|token| self.telemetry_or_default() && !token.is_empty())
    }
}
