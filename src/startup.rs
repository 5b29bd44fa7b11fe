//! Application startup and server initialization.
//!
//! Wires storage, session restore, the route table, and the HTTP surface
//! together, then serves on the configured address.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ConfigV1;
use crate::metrics::{Metrics, MetricsRecorder};
use crate::navigation::{route_table, Navigator, RouteTable};
use crate::routes;
use crate::session::SessionStore;
use crate::state::AppState;
use crate::storage::create_storage;

/// Initializes and runs the application server.
///
/// Restores the session from the configured storage backend before anything
/// else; a persisted record that exists but cannot be read is fatal here,
/// matching the session contract.
///
/// # Errors
///
/// Returns an error if the server encounters a runtime error during
/// execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let storage = create_storage(&config.storage);
    let metrics = Metrics::new();

    let session = match SessionStore::restore(storage) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            error!("Failed to restore session: {}", e);
            std::process::exit(1);
        }
    };
    metrics.record_session_operation("restore");

    let navigator = Arc::new(Navigator::new(
        RouteTable::new(route_table()),
        session.clone(),
    ));

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        session,
        navigator,
        metrics,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Could not bind to specified address");

    axum::serve(listener, app).await?;

    Ok(())
}
