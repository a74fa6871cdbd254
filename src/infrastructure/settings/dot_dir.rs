//! Dot-directory settings adapter

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::ports::{FileWriter, SettingsError, SettingsStore};
use crate::domain::settings::DEFAULT_SETTINGS_DIR;
use crate::infrastructure::fs::StdFileWriter;

/// Settings stored one file per name under a hidden project directory,
/// e.g. `.convox/app`.
pub struct DotDirSettings<W: FileWriter = StdFileWriter> {
    root: PathBuf,
    dir: String,
    writer: W,
}

impl DotDirSettings<StdFileWriter> {
    /// Settings under `.convox/` relative to the working directory
    pub fn new() -> Self {
        Self::with_writer(StdFileWriter::new())
    }
}

impl Default for DotDirSettings<StdFileWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: FileWriter> DotDirSettings<W> {
    /// Create with a custom file writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            root: PathBuf::new(),
            dir: DEFAULT_SETTINGS_DIR.to_string(),
            writer,
        }
    }

    /// Resolve settings against `root` instead of the working directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Use a different hidden directory name
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Directory holding the setting files
    pub fn dir(&self) -> PathBuf {
        self.root.join(&self.dir)
    }

    /// File backing `name`
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir().join(name)
    }

    fn read_file(path: &Path) -> Option<String> {
        fs::read_to_string(path)
            .ok()
            .map(|content| content.trim().to_string())
    }
}

impl<W: FileWriter> SettingsStore for DotDirSettings<W> {
    fn lookup(&self, name: &str) -> Option<String> {
        Self::read_file(&self.path(name))
    }

    fn write(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        let path = self.path(name);
        self.writer
            .write(&path, value.as_bytes())
            .map_err(|source| SettingsError::Write { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    fn store_in(root: &Path) -> DotDirSettings {
        fs::create_dir(root.join(".convox")).unwrap();
        DotDirSettings::new().with_root(root)
    }

    #[test]
    fn default_path_is_relative_dot_dir() {
        let store = DotDirSettings::new();
        assert_eq!(store.path("app"), PathBuf::from(".convox/app"));
    }

    #[test]
    fn custom_dir() {
        let store = DotDirSettings::new().with_root("/srv/web").with_dir(".rack");
        assert_eq!(store.path("app"), PathBuf::from("/srv/web/.rack/app"));
    }

    #[test]
    fn write_then_read() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        store.write("app", "myapp").unwrap();

        assert_eq!(store.read("app"), "myapp");
    }

    #[test]
    fn write_is_verbatim_read_is_trimmed() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        store.write("app", "  myapp\n").unwrap();

        let raw = fs::read_to_string(root.path().join(".convox/app")).unwrap();
        assert_eq!(raw, "  myapp\n");
        assert_eq!(store.read("app"), "myapp");
    }

    #[test]
    fn overwrite_replaces_value() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        store.write("app", "first").unwrap();
        store.write("app", "second").unwrap();

        assert_eq!(store.read("app"), "second");
    }

    #[test]
    fn read_missing_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let store = DotDirSettings::new().with_root(root.path());

        assert_eq!(store.read("app"), "");
        assert_eq!(store.lookup("app"), None);
    }

    #[test]
    fn lookup_distinguishes_empty_from_absent() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        store.write("app", "   ").unwrap();

        assert_eq!(store.lookup("app"), Some(String::new()));
        assert_eq!(store.read("app"), "");
    }

    #[test]
    fn write_without_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let store = DotDirSettings::new().with_root(root.path());

        let err = store.write("app", "myapp").unwrap_err();

        let SettingsError::Write { path, .. } = err;
        assert!(path.ends_with(".convox/app"));
        assert!(!root.path().join(".convox").exists());
    }

    struct RecordingWriter {
        writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl FileWriter for RecordingWriter {
        fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), data.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn writes_go_through_injected_writer() {
        let writer = RecordingWriter {
            writes: Mutex::new(Vec::new()),
        };
        let store = DotDirSettings::with_writer(writer).with_root("/project");

        store.write("app", "web").unwrap();

        let writes = store.writer.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PathBuf::from("/project/.convox/app"));
        assert_eq!(writes[0].1, b"web".to_vec());
    }
}
