//! `completion` command: print a shell completion script

use std::io;

use clap_complete::{generate, Shell};

use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::registry::{CommandDescriptor, Positional};

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("completion")
        .description("print a shell completion script")
        .usage("<shell>")
        .positional(Positional::required(
            "shell",
            "bash, zsh, fish, powershell or elvish",
        ))
        .handler(completion)
}

fn parse_shell(name: &str) -> Result<Shell, CommandError> {
    name.parse::<Shell>()
        .map_err(|_| CommandError::message(format!("unsupported shell: {}", name)))
}

fn completion(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    let shell = parse_shell(&ctx.string("shell"))?;
    let mut command = ctx.root_command().clone();
    let name = ctx.binary().to_string();

    generate(shell, &mut command, name, &mut io::stdout());

    Ok(())
}
