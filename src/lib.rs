//! stdcli - building blocks for the convox command-line interface
//!
//! Loose `--key=value` option parsing, per-project settings in a hidden
//! dot-directory, app resolution, a declarative command registry, process
//! execution seams and best-effort telemetry.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (`Options`, `AppId`, `CliConfig`) and errors
//! - **Application**: App resolution, telemetry reporting and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (processes, dot-dir settings, Segment, Rollbar)
//! - **CLI**: Command registry, dispatch, output formatting and built-in commands

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
