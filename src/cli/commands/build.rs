//! `build` command: build the app image with docker

use crate::application::AppContext;
use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::registry::{CommandDescriptor, Flag};
use crate::domain::options::Options;

use super::apps::app_flag;

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("build")
        .description("build an image for the app")
        .usage("[options] [--key=value ...]")
        .flag(app_flag())
        .flag(Flag::switch("no-cache", "build without the docker layer cache"))
        .raw_args()
        .handler(build)
}

/// `docker build` arguments for `target`. Each option becomes a build arg;
/// values given before any `--key` are dropped.
pub fn build_args(target: &AppContext, tag: &str, options: &Options) -> Vec<String> {
    let mut args = vec![
        "build".to_string(),
        "-t".to_string(),
        format!("{}:{}", target.app, tag),
    ];

    for (key, value) in options.sorted() {
        if key.is_empty() {
            continue;
        }
        args.push("--build-arg".to_string());
        args.push(format!("{}={}", key, value));
    }

    args.push(target.dir.to_string_lossy().into_owned());
    args
}

fn build(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    let target = ctx.resolve_app()?;
    let tag = ctx.tag();
    let mut args = build_args(&target, &tag, &ctx.options());
    if ctx.flag("no-cache") {
        args.insert(1, "--no-cache".to_string());
    }

    ctx.presenter()
        .info(&format!("Building {}:{}", target.app, tag));
    ctx.run("docker", &args)?;
    ctx.presenter().success(&format!("Built {}:{}", target.app, tag));

    Ok(())
}
