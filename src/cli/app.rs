//! CLI runtime: parse, dispatch, report

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::ArgMatches;

use crate::application::ports::{AnalyticsSink, ConfigStore, CrashReporter};
use crate::application::TelemetryReporter;
use crate::domain::config::CliConfig;

use super::context::{Context, Services};
use super::error::CommandError;
use super::presenter::Presenter;
use super::registry::{CommandDescriptor, CommandRegistry, Handler};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 129;

/// Binary name used when the invocation name is unavailable
pub const DEFAULT_BINARY: &str = "convox";

/// Name this process was invoked as
pub fn binary_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_BINARY.to_string())
}

/// Load and merge configuration from file and env
pub fn load_merged_config(store: &dyn ConfigStore) -> CliConfig {
    let file_config = store.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        CliConfig::empty()
    });

    // Merge: defaults < file < env
    CliConfig::defaults()
        .merge(file_config)
        .merge(env_config(|key| env::var(key).ok()))
}

/// Build config from `CONVOX_*` environment variables
pub fn env_config<F>(lookup: F) -> CliConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    CliConfig {
        id: non_empty("CONVOX_ID"),
        telemetry: non_empty("CONVOX_TELEMETRY").map(|v| {
            !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
        }),
        segment_write_key: non_empty("CONVOX_SEGMENT_WRITE_KEY"),
        rollbar_token: non_empty("CONVOX_ROLLBAR_TOKEN"),
        settings_dir: non_empty("CONVOX_SETTINGS_DIR"),
    }
}

/// The assembled CLI: command table, services and telemetry
pub struct App<A, C>
where
    A: AnalyticsSink,
    C: CrashReporter,
{
    registry: CommandRegistry,
    services: Services,
    telemetry: TelemetryReporter<A, C>,
    presenter: Presenter,
}

/// Command selected from the parsed arguments
struct Selected<'m> {
    path: Vec<&'static str>,
    descriptor: &'m CommandDescriptor,
    matches: &'m ArgMatches,
}

enum Dispatch<'m> {
    Command(Selected<'m>),
    NotFound(String),
    Empty,
}

impl<A, C> App<A, C>
where
    A: AnalyticsSink,
    C: CrashReporter,
{
    pub fn new(
        registry: CommandRegistry,
        services: Services,
        telemetry: TelemetryReporter<A, C>,
    ) -> Self {
        Self {
            registry,
            services,
            telemetry,
            presenter: Presenter::new(),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one invocation. `args` includes the binary name.
    ///
    /// # Returns
    /// The process exit code
    pub async fn run<I, T>(&self, args: I) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let root = self.registry.build();

        let matches = match root.clone().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => {
                // Output stream gone; the exit code still reports the outcome
                e.print().ok();
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                    _ => EXIT_USAGE_ERROR,
                };
            }
        };

        let selected = match self.select(&matches) {
            Dispatch::Command(selected) => selected,
            Dispatch::NotFound(name) => {
                self.presenter
                    .command_not_found(&name, self.registry.binary());
                return EXIT_ERROR;
            }
            Dispatch::Empty => {
                root.clone().print_help().ok();
                return EXIT_SUCCESS;
            }
        };

        let Some(handler) = selected.descriptor.handler_fn() else {
            self.print_help(&selected.path);
            return EXIT_USAGE_ERROR;
        };

        self.execute(handler, selected, &root).await
    }

    async fn execute(
        &self,
        handler: Handler,
        selected: Selected<'_>,
        root: &clap::Command,
    ) -> u8 {
        let source = format!("cli-{}", selected.path.join("-"));
        let path = selected.path.clone();
        let started = Instant::now();

        let mut ctx = Context::new(
            self.registry.binary(),
            selected.path,
            selected.matches,
            &self.services,
            root,
        );
        tracing::debug!(command = %ctx.full_name(), "dispatching");
        let result = handler(&mut ctx);
        ctx.presenter_mut().stop_spinner();

        match result {
            Ok(()) => {
                self.telemetry.success_event(&source, started).await;
                EXIT_SUCCESS
            }
            Err(CommandError::Usage) => {
                self.print_help(&path);
                EXIT_USAGE_ERROR
            }
            Err(e) => {
                self.telemetry.error_event(&source, &e).await;
                self.presenter.fatal(&e.to_string());
                EXIT_ERROR
            }
        }
    }

    fn select<'m>(&'m self, matches: &'m ArgMatches) -> Dispatch<'m> {
        let Some((name, mut sub_matches)) = matches.subcommand() else {
            return Dispatch::Empty;
        };

        let Some(mut descriptor) = self.registry.commands().iter().find(|c| c.name() == name)
        else {
            return Dispatch::NotFound(name.to_string());
        };

        let mut path = vec![descriptor.name()];
        while let Some((child_name, child_matches)) = sub_matches.subcommand() {
            let Some(child) = descriptor
                .subcommands()
                .iter()
                .find(|c| c.name() == child_name)
            else {
                return Dispatch::NotFound(child_name.to_string());
            };
            path.push(child.name());
            descriptor = child;
            sub_matches = child_matches;
        }

        Dispatch::Command(Selected {
            path,
            descriptor,
            matches: sub_matches,
        })
    }

    /// Print help for the command at `path`
    fn print_help(&self, path: &[&str]) {
        let mut argv: Vec<&str> = vec![self.registry.binary()];
        argv.extend_from_slice(path);
        argv.push("--help");

        if let Err(e) = self.registry.build().try_get_matches_from(argv) {
            e.print().ok();
        }
    }
}
