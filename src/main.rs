use std::sync::Arc;

use navotron::config::{load_config, print_schema};
use navotron::startup;
use navotron::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    // "--schema" prints the config JSON schema and exits.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
