//! Build tag adapters

use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::ports::Tagger;

/// Tags builds with the current Unix time in seconds
pub struct UnixTimeTagger;

impl UnixTimeTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixTimeTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for UnixTimeTagger {
    fn tag(&self) -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        secs.to_string()
    }
}
