//! Fakes for exercising commands end to end

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::application::ports::{
    ProcessError, ProcessQuerier, ProcessRunner, SettingsError, SettingsStore, Tagger,
};
use crate::application::TelemetryReporter;
use crate::cli::app::App;
use crate::cli::context::Services;
use crate::infrastructure::{NoOpAnalytics, NoOpCrashReporter, XdgConfigStore};

pub type Calls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

pub struct RecordingRunner {
    pub calls: Calls,
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, bin: &str, args: &[String]) -> Result<(), ProcessError> {
        self.calls
            .lock()
            .unwrap()
            .push((bin.to_string(), args.to_vec()));
        Ok(())
    }
}

pub struct CannedQuerier {
    pub calls: Calls,
    pub result: Result<Vec<u8>, ProcessError>,
}

impl ProcessQuerier for CannedQuerier {
    fn query(&self, bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError> {
        self.calls
            .lock()
            .unwrap()
            .push((bin.to_string(), args.to_vec()));
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct MemorySettings {
    pub values: Arc<Mutex<HashMap<String, String>>>,
}

impl SettingsStore for MemorySettings {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

pub struct FixedTagger;

impl Tagger for FixedTagger {
    fn tag(&self) -> String {
        "1700000000".to_string()
    }
}

/// Full `convox` command table wired to fakes
pub struct TestCli {
    pub app: App<NoOpAnalytics, NoOpCrashReporter>,
    pub runs: Calls,
    pub queries: Calls,
    pub settings: MemorySettings,
}

impl TestCli {
    pub fn new(config_path: &Path, settings_dir: &Path) -> Self {
        Self::with_query_result(config_path, settings_dir, Ok(b"24.0.7\n".to_vec()))
    }

    pub fn with_query_result(
        config_path: &Path,
        settings_dir: &Path,
        result: Result<Vec<u8>, ProcessError>,
    ) -> Self {
        let runs = Calls::default();
        let queries = Calls::default();
        let settings = MemorySettings::default();

        let services = Services {
            runner: Box::new(RecordingRunner {
                calls: runs.clone(),
            }),
            querier: Box::new(CannedQuerier {
                calls: queries.clone(),
                result,
            }),
            settings: Box::new(settings.clone()),
            tagger: Box::new(FixedTagger),
            config: Box::new(XdgConfigStore::with_path(config_path)),
            settings_dir: settings_dir.to_path_buf(),
        };

        let telemetry =
            TelemetryReporter::new(NoOpAnalytics::new(), NoOpCrashReporter::new(), "test");

        Self {
            app: App::new(super::registry("convox"), services, telemetry),
            runs,
            queries,
            settings,
        }
    }

    pub async fn run(&self, args: &[&str]) -> u8 {
        let argv = std::iter::once("convox").chain(args.iter().copied());
        self.app.run(argv).await
    }

    pub fn setting(&self, name: &str) -> Option<String> {
        self.settings.lookup(name)
    }
}
