//! `config` command group

use crate::application::ports::ConfigStore;
use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::presenter::Presenter;
use crate::cli::registry::{CommandDescriptor, Positional};
use crate::domain::config::CliConfig;
use crate::domain::error::ConfigError;

/// Keys accepted by `config get` and `config set`
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "id",
    "telemetry",
    "segment_write_key",
    "rollbar_token",
    "settings_dir",
];

const SECRET_KEYS: &[&str] = &["segment_write_key", "rollbar_token"];

const NOT_SET: &str = "(not set)";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("config")
        .description("manage cli configuration")
        .usage("<command>")
        .subcommand(
            CommandDescriptor::new("init")
                .description("create a config file with defaults")
                .handler(|ctx| handle_init(ctx.config_store(), ctx.presenter())),
        )
        .subcommand(
            CommandDescriptor::new("set")
                .description("set a config value")
                .usage("<key> <value>")
                .positional(Positional::required("key", "config key"))
                .positional(Positional::required("value", "new value"))
                .handler(|ctx| {
                    let (key, value) = (ctx.string("key"), ctx.string("value"));
                    handle_set(ctx.config_store(), ctx.presenter(), &key, &value)
                }),
        )
        .subcommand(
            CommandDescriptor::new("get")
                .description("print a config value")
                .usage("<key>")
                .positional(Positional::required("key", "config key"))
                .handler(|ctx| {
                    let key = ctx.string("key");
                    handle_get(ctx.config_store(), ctx.presenter(), &key)
                }),
        )
        .subcommand(
            CommandDescriptor::new("list")
                .alias("ls")
                .description("print all config values")
                .handler(|ctx| handle_list(ctx.config_store(), ctx.presenter())),
        )
        .subcommand(
            CommandDescriptor::new("path")
                .description("print the config file location")
                .handler(handle_path),
        )
}

fn handle_init(store: &dyn ConfigStore, presenter: &Presenter) -> Result<(), CommandError> {
    store.init()?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set(
    store: &dyn ConfigStore,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), CommandError> {
    validate_key(key)?;

    let mut config = store.load()?;
    match key {
        "id" => config.id = Some(value.to_string()),
        "telemetry" => {
            config.telemetry =
                Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'true' or 'false'".to_string(),
                })?)
        }
        "segment_write_key" => config.segment_write_key = Some(value.to_string()),
        "rollbar_token" => config.rollbar_token = Some(value.to_string()),
        "settings_dir" => config.settings_dir = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }
    store.save(&config)?;

    presenter.success(&format!("{} = {}", key, display_value(key, Some(value.to_string()))));
    Ok(())
}

fn handle_get(store: &dyn ConfigStore, presenter: &Presenter, key: &str) -> Result<(), CommandError> {
    validate_key(key)?;

    let config = store.load()?;
    presenter.output(&display_value(key, value_of(&config, key)));
    Ok(())
}

fn handle_list(store: &dyn ConfigStore, presenter: &Presenter) -> Result<(), CommandError> {
    let config = store.load()?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, &display_value(key, value_of(&config, key)));
    }
    Ok(())
}

fn handle_path(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    ctx.presenter()
        .output(&ctx.config_store().path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if VALID_CONFIG_KEYS.contains(&key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn value_of(config: &CliConfig, key: &str) -> Option<String> {
    match key {
        "id" => config.id.clone(),
        "telemetry" => config.telemetry.map(|b| b.to_string()),
        "segment_write_key" => config.segment_write_key.clone(),
        "rollbar_token" => config.rollbar_token.clone(),
        "settings_dir" => config.settings_dir.clone(),
        _ => None,
    }
}

fn display_value(key: &str, value: Option<String>) -> String {
    match value {
        Some(v) if SECRET_KEYS.contains(&key) => mask_secret(&v),
        Some(v) => v,
        None => NOT_SET.to_string(),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask a secret for display (first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
