//! Process execution adapters

mod system;

pub use system::{SystemQuerier, SystemRunner};
