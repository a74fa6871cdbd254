//! convox CLI entry point

use std::process::ExitCode;

use stdcli::cli::app::{binary_name, load_merged_config};
use stdcli::cli::{commands, logging, App, Services};
use stdcli::infrastructure::{create_reporter, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    logging::init();

    let store = XdgConfigStore::new();
    let config = load_merged_config(&store);
    tracing::debug!(
        id = config.id_or_default(),
        telemetry = config.telemetry_or_default(),
        "loaded configuration"
    );

    let telemetry = create_reporter(&config);
    let services = Services::system(&config, store);
    let app = App::new(commands::registry(binary_name()), services, telemetry);

    ExitCode::from(app.run(std::env::args_os()).await)
}
