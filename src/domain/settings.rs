//! Project setting names

/// Hidden per-project directory holding setting files
pub const DEFAULT_SETTINGS_DIR: &str = ".convox";

/// Setting remembering the active application
pub const APP_SETTING: &str = "app";
