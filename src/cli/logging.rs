//! Diagnostic logging setup

use std::ffi::OsStr;

use tracing_subscriber::EnvFilter;

/// Any non-empty value turns on debug diagnostics
pub const DEBUG_ENV: &str = "DEBUG";

/// Full filter override, in `tracing_subscriber` syntax
pub const LOG_ENV: &str = "CONVOX_LOG";

/// Whether `DEBUG` is set to a non-empty value
pub fn debug_enabled() -> bool {
    is_enabled(std::env::var_os(DEBUG_ENV).as_deref())
}

fn is_enabled(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "warn" };
    format!("warn,stdcli={}", level)
}

/// Install a stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug_enabled())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_debug_is_off() {
        assert!(!is_enabled(None));
        assert!(!is_enabled(Some(OsStr::new(""))));
    }

    #[test]
    fn any_value_is_on() {
        assert!(is_enabled(Some(OsStr::new("1"))));
        assert!(is_enabled(Some(OsStr::new("false"))));
    }

    #[test]
    fn filter_levels() {
        assert_eq!(default_filter(true), "warn,stdcli=debug");
        assert_eq!(default_filter(false), "warn,stdcli=warn");
    }
}
