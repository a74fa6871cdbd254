//! Help templates handed to clap
//!
//! `{bin}` is replaced with the full invocation path (e.g. `convox apps`)
//! by the registry before clap sees the template. The remaining placeholders
//! are clap's: `{name}` is the command name, `{usage}` the usage line built
//! from each command's declared usage string.

/// Top-level help: binary summary, subcommand list, global options
pub const APP_HELP_TEMPLATE: &str = "\
{name}: {about}

Usage:
  {name} <command> [args...]

Subcommands: ({name} help <subcommand>)
{subcommands}

Options:
{options}
";

/// Help for a leaf command
pub const COMMAND_HELP_TEMPLATE: &str = "\
{bin}: {about}

Usage:
  {usage}

Options:
{options}
";

/// Help for a command that groups subcommands
pub const SUBCOMMAND_HELP_TEMPLATE: &str = "\
{bin}: {about}

Usage:
  {usage}

Subcommands: ({bin} help <subcommand>)
{subcommands}

Options:
{options}
";
