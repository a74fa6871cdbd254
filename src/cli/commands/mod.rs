//! Built-in commands

mod apps;
mod build;
mod completion;
mod config_cmd;
mod doctor;
mod switch;

#[cfg(test)]
pub(crate) mod testing;

use super::registry::CommandRegistry;

pub use build::build_args;

/// Register every built-in command, in help-listing order
pub fn register_all(registry: &mut CommandRegistry) -> &mut CommandRegistry {
    registry
        .register(apps::descriptor())
        .register(build::descriptor())
        .register(switch::descriptor())
        .register(doctor::descriptor())
        .register(config_cmd::descriptor())
        .register(completion::descriptor())
}

/// The `convox` command table
pub fn registry(binary: impl Into<String>) -> CommandRegistry {
    let mut registry = CommandRegistry::new(binary)
        .description("convox command-line interface")
        .version(env!("CARGO_PKG_VERSION"));
    register_all(&mut registry);
    registry
}
