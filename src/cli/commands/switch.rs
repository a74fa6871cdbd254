//! `switch` command: pin the app for this directory

use std::fs;

use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::registry::{CommandDescriptor, Positional};
use crate::domain::app_id::AppId;
use crate::domain::settings::APP_SETTING;

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("switch")
        .description("set or show the app for this directory")
        .usage("[app]")
        .positional(Positional::optional("name", "app to switch to"))
        .handler(switch)
}

fn switch(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    let name = ctx.string("name");

    if name.is_empty() {
        let resolved = ctx.resolve_app()?;
        ctx.presenter().output(resolved.app.as_str());
        return Ok(());
    }

    let app = AppId::new(name);
    fs::create_dir_all(ctx.settings_dir())?;
    ctx.settings().write(APP_SETTING, app.as_str())?;

    tracing::debug!(app = %app, dir = %ctx.settings_dir().display(), "switched app");
    ctx.presenter().success(&format!("Switched to {}", app));

    Ok(())
}
