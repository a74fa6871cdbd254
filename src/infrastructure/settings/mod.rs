//! Project settings adapters

mod dot_dir;

pub use dot_dir::DotDirSettings;
