//! `doctor` command: check the local toolchain

use crate::cli::context::Context;
use crate::cli::error::CommandError;
use crate::cli::registry::CommandDescriptor;

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("doctor")
        .description("check that docker is reachable")
        .handler(doctor)
}

fn docker_version_args() -> Vec<String> {
    ["version", "--format", "{{.Server.Version}}"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn doctor(ctx: &mut Context<'_>) -> Result<(), CommandError> {
    ctx.presenter_mut().start_spinner("Checking docker...");

    match ctx.query("docker", &docker_version_args()) {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output).trim().to_string();
            ctx.presenter_mut()
                .spinner_success(&format!("docker server {}", version));
            Ok(())
        }
        Err(e) => {
            ctx.presenter_mut().spinner_fail("docker is not available");
            if !e.output().is_empty() {
                ctx.presenter().output_bytes(e.output());
            }
            Err(e.into())
        }
    }
}
