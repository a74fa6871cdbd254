//! Resolve which application the current invocation targets

use std::fs;
use std::io;
use std::path::{self, Component, Path, PathBuf};

use crate::domain::app_id::AppId;
use crate::domain::error::PathResolutionError;
use crate::domain::settings::APP_SETTING;

use super::ports::SettingsStore;

/// Absolute project directory and the application it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub dir: PathBuf,
    pub app: AppId,
}

/// Picks the application identifier by priority:
/// explicit flag, then the persisted `app` setting, then the directory name.
///
/// Only ever reads settings.
pub struct AppContextResolver<'a, S: SettingsStore + ?Sized> {
    settings: &'a S,
}

impl<'a, S: SettingsStore + ?Sized> AppContextResolver<'a, S> {
    pub fn new(settings: &'a S) -> Self {
        Self { settings }
    }

    /// Resolve the context for `working_dir`.
    ///
    /// # Arguments
    /// * `explicit` - Value of the `--app` flag, empty when not given
    /// * `working_dir` - Directory the command runs against
    pub fn resolve(
        &self,
        explicit: &str,
        working_dir: &Path,
    ) -> Result<AppContext, PathResolutionError> {
        let dir = absolute_dir(working_dir).map_err(|source| PathResolutionError {
            path: working_dir.to_path_buf(),
            source,
        })?;

        let app = if !explicit.is_empty() {
            explicit.to_string()
        } else {
            let setting = self.settings.read(APP_SETTING);
            if !setting.is_empty() {
                setting
            } else {
                base_name(&dir)
            }
        };

        Ok(AppContext {
            dir,
            app: AppId::new(app),
        })
    }
}

/// Absolute, lexically cleaned form of an existing `dir`. Symlinks are
/// kept as written.
fn absolute_dir(dir: &Path) -> io::Result<PathBuf> {
    fs::metadata(dir)?;
    let absolute = path::absolute(dir)?;

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}

/// Final path component, or "/" for the root
fn base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string())
}
