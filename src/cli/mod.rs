//! CLI layer - Command-line interface
//!
//! Contains the command registry, dispatch runtime, output formatting,
//! logging setup and the built-in commands.

pub mod app;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod registry;
pub mod templates;

// Re-export commonly used types
pub use app::{App, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use context::{Context, Services};
pub use error::CommandError;
pub use presenter::Presenter;
pub use registry::{CommandDescriptor, CommandRegistry, Flag, Positional};
