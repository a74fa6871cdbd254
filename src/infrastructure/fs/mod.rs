//! Filesystem adapters

use std::fs;
use std::io;
use std::path::Path;

use crate::application::ports::FileWriter;

/// Writes files with `std::fs`
pub struct StdFileWriter;

impl StdFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter for StdFileWriter {
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }
}
