//! Per-invocation command context and injected services

use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command};

use crate::application::ports::{
    ConfigStore, ProcessError, ProcessQuerier, ProcessRunner, SettingsStore, Tagger,
};
use crate::application::{AppContext, AppContextResolver};
use crate::domain::config::CliConfig;
use crate::domain::options::{parse_opts, Options};
use crate::infrastructure::{
    DotDirSettings, SystemQuerier, SystemRunner, UnixTimeTagger, XdgConfigStore,
};

use super::error::CommandError;
use super::presenter::Presenter;
use super::registry::RAW_ARGS;

/// Side-effecting capabilities available to commands
pub struct Services {
    pub runner: Box<dyn ProcessRunner>,
    pub querier: Box<dyn ProcessQuerier>,
    pub settings: Box<dyn SettingsStore>,
    pub tagger: Box<dyn Tagger>,
    pub config: Box<dyn ConfigStore>,
    /// Hidden directory `settings` reads from, relative to the working directory
    pub settings_dir: PathBuf,
}

impl Services {
    /// Real adapters: system processes, `.convox`-style settings, wall clock tags
    pub fn system(config: &CliConfig, store: XdgConfigStore) -> Self {
        Self {
            runner: Box::new(SystemRunner::new()),
            querier: Box::new(SystemQuerier::new()),
            settings: Box::new(DotDirSettings::new().with_dir(config.settings_dir_or_default())),
            tagger: Box::new(UnixTimeTagger::new()),
            config: Box::new(store),
            settings_dir: PathBuf::from(config.settings_dir_or_default()),
        }
    }
}

/// What a handler sees: its parsed arguments and the services
pub struct Context<'a> {
    binary: &'a str,
    path: Vec<&'static str>,
    matches: &'a ArgMatches,
    services: &'a Services,
    root: &'a Command,
    presenter: Presenter,
}

impl<'a> Context<'a> {
    pub fn new(
        binary: &'a str,
        path: Vec<&'static str>,
        matches: &'a ArgMatches,
        services: &'a Services,
        root: &'a Command,
    ) -> Self {
        Self {
            binary,
            path,
            matches,
            services,
            root,
            presenter: Presenter::new(),
        }
    }

    pub fn binary(&self) -> &str {
        self.binary
    }

    /// Command path without the binary, e.g. `apps info`
    pub fn full_name(&self) -> String {
        self.path.join(" ")
    }

    /// Value of a string flag or positional, empty when absent
    pub fn string(&self, name: &str) -> String {
        self.matches
            .try_get_one::<String>(name)
            .ok()
            .flatten()
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a switch flag was given
    pub fn flag(&self, name: &str) -> bool {
        self.matches
            .try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    /// Tokens collected by a raw-args command
    pub fn raw_args(&self) -> Vec<String> {
        self.matches
            .try_get_many::<String>(RAW_ARGS)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Raw tokens parsed as loose `--key=value` options
    pub fn options(&self) -> Options {
        parse_opts(self.raw_args())
    }

    /// Resolve the target app for the working directory
    pub fn resolve_app(&self) -> Result<AppContext, CommandError> {
        self.resolve_app_in(Path::new("."))
    }

    /// Resolve the target app for `dir`, honoring the `--app` flag
    pub fn resolve_app_in(&self, dir: &Path) -> Result<AppContext, CommandError> {
        let explicit = self.string("app");
        let resolved =
            AppContextResolver::new(self.services.settings.as_ref()).resolve(&explicit, dir)?;
        Ok(resolved)
    }

    /// Run a binary attached to the terminal
    pub fn run(&self, bin: &str, args: &[String]) -> Result<(), ProcessError> {
        self.services.runner.run(bin, args)
    }

    /// Run a binary and capture its combined output
    pub fn query(&self, bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError> {
        self.services.querier.query(bin, args)
    }

    pub fn tag(&self) -> String {
        self.services.tagger.tag()
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.services.settings.as_ref()
    }

    pub fn settings_dir(&self) -> &Path {
        &self.services.settings_dir
    }

    pub fn config_store(&self) -> &dyn ConfigStore {
        self.services.config.as_ref()
    }

    /// The full clap command tree
    pub fn root_command(&self) -> &Command {
        self.root
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter {
        &mut self.presenter
    }
}
