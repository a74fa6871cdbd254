//! File writing port interface

use std::io;
use std::path::Path;

/// Port for writing whole files
pub trait FileWriter: Send + Sync {
    /// Write `data` to `path`, replacing any existing content.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}
