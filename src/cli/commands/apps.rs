//! `apps` command group

use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::registry::{CommandDescriptor, Flag};

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("apps")
        .description("inspect apps")
        .usage("<command>")
        .subcommand(
            CommandDescriptor::new("info")
                .description("show the app this directory maps to")
                .usage("[options]")
                .flag(app_flag())
                .handler(info),
        )
}

/// `--app` / `-a`, shared by every app-scoped command
pub fn app_flag() -> Flag {
    Flag::value("app", "app name inferred from current directory if not specified").short('a')
}

fn info(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    let resolved = ctx.resolve_app()?;

    let presenter = ctx.presenter();
    presenter.key_value("Name", resolved.app.as_str());
    presenter.key_value("Directory", &resolved.dir.to_string_lossy());

    Ok(())
}
