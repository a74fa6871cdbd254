//! Command registry
//!
//! Commands are described as plain data ([`CommandDescriptor`]) and collected
//! in registration order by a [`CommandRegistry`]. The registry turns the
//! whole list into a clap [`Command`] tree once, at startup.

use clap::{Arg, ArgAction, Command};

use super::context::Context;
use super::error::CommandError;
use super::templates::{APP_HELP_TEMPLATE, COMMAND_HELP_TEMPLATE, SUBCOMMAND_HELP_TEMPLATE};

/// Id of the hidden positional collecting unparsed tokens
pub const RAW_ARGS: &str = "raw-args";

/// Command handler
pub type Handler = fn(&mut Context<'_>) -> Result<(), CommandError>;

/// Kind of a declared flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// `--name`, read with [`Context::flag`]
    Switch,
    /// `--name VALUE` or `--name=VALUE`, read with [`Context::string`]
    Value,
}

/// Flag declaration
#[derive(Debug, Clone)]
pub struct Flag {
    name: &'static str,
    short: Option<char>,
    usage: &'static str,
    kind: FlagKind,
}

impl Flag {
    pub fn switch(name: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            short: None,
            usage,
            kind: FlagKind::Switch,
        }
    }

    pub fn value(name: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            short: None,
            usage,
            kind: FlagKind::Value,
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name).long(self.name).help(self.usage);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        match self.kind {
            FlagKind::Switch => arg.action(ArgAction::SetTrue),
            FlagKind::Value => arg
                .action(ArgAction::Set)
                .value_name(self.name.to_uppercase()),
        }
    }
}

/// Positional argument declaration
#[derive(Debug, Clone)]
pub struct Positional {
    name: &'static str,
    usage: &'static str,
    required: bool,
}

impl Positional {
    pub fn required(name: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            usage,
            required: true,
        }
    }

    pub fn optional(name: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            usage,
            required: false,
        }
    }

    fn to_arg(&self) -> Arg {
        Arg::new(self.name)
            .help(self.usage)
            .required(self.required)
            .value_name(self.name.to_uppercase())
            .action(ArgAction::Set)
    }
}

/// Description of one command: name, help text, arguments and handler
#[derive(Clone)]
pub struct CommandDescriptor {
    name: &'static str,
    aliases: Vec<&'static str>,
    usage: &'static str,
    description: &'static str,
    flags: Vec<Flag>,
    positionals: Vec<Positional>,
    subcommands: Vec<CommandDescriptor>,
    handler: Option<Handler>,
    raw_args: bool,
}

impl CommandDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            usage: "",
            description: "",
            flags: Vec::new(),
            positionals: Vec::new(),
            subcommands: Vec::new(),
            handler: None,
            raw_args: false,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    /// Usage text shown after `<binary> <command>`
    pub fn usage(mut self, usage: &'static str) -> Self {
        self.usage = usage;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn positional(mut self, positional: Positional) -> Self {
        self.positionals.push(positional);
        self
    }

    pub fn subcommand(mut self, subcommand: CommandDescriptor) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Collect undeclared tokens (e.g. `--key=value`) for [`Context::options`]
    pub fn raw_args(mut self) -> Self {
        self.raw_args = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    pub fn description_text(&self) -> &'static str {
        self.description
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn subcommands(&self) -> &[CommandDescriptor] {
        &self.subcommands
    }

    pub fn handler_fn(&self) -> Option<Handler> {
        self.handler
    }

    pub fn accepts_raw_args(&self) -> bool {
        self.raw_args
    }

    fn to_command(&self, prefix: &str) -> Command {
        let full_name = format!("{} {}", prefix, self.name);
        let usage = if self.usage.is_empty() {
            full_name.clone()
        } else {
            format!("{} {}", full_name, self.usage)
        };
        let template = if self.subcommands.is_empty() {
            COMMAND_HELP_TEMPLATE
        } else {
            SUBCOMMAND_HELP_TEMPLATE
        };

        // clap's `{bin}` is dash-joined for subcommands; help shows the invocation path
        let mut command = Command::new(self.name)
            .bin_name(full_name.clone())
            .about(self.description)
            .override_usage(usage)
            .help_template(template.replace("{bin}", &full_name))
            .visible_aliases(self.aliases.clone());

        for flag in &self.flags {
            command = command.arg(flag.to_arg());
        }
        for positional in &self.positionals {
            command = command.arg(positional.to_arg());
        }
        if self.raw_args {
            command = command.arg(
                Arg::new(RAW_ARGS)
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .trailing_var_arg(true)
                    .hide(true),
            );
        }
        if !self.subcommands.is_empty() {
            command = command.allow_external_subcommands(true);
        }
        for subcommand in &self.subcommands {
            command = command.subcommand(subcommand.to_command(&full_name));
        }

        command
    }
}

/// Ordered list of commands for one binary
pub struct CommandRegistry {
    binary: String,
    description: &'static str,
    version: Option<String>,
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry for `binary`
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            description: "",
            version: None,
            commands: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Version printed by `--version`
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Append a command. Registration order is help-listing order.
    pub fn register(&mut self, command: CommandDescriptor) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Walk descriptors by canonical name, e.g. `["apps", "info"]`
    pub fn find(&self, path: &[&str]) -> Option<&CommandDescriptor> {
        let (first, rest) = path.split_first()?;
        let mut current = self.commands.iter().find(|c| c.name == *first)?;
        for name in rest {
            current = current.subcommands.iter().find(|c| c.name == *name)?;
        }
        Some(current)
    }

    /// Build the clap dispatch table
    pub fn build(&self) -> Command {
        let mut root = Command::new(self.binary.clone())
            .bin_name(self.binary.clone())
            .about(self.description)
            .help_template(APP_HELP_TEMPLATE)
            .allow_external_subcommands(true);

        if let Some(version) = &self.version {
            root = root.version(version.clone());
        }

        for command in &self.commands {
            root = root.subcommand(command.to_command(&self.binary));
        }

        root
    }
}
