//! HTTP route definitions and handlers.
//!
//! The HTTP surface stands in for the host UI framework: view paths resolve
//! through the navigator (guard redirects become HTTP redirects), and the
//! session endpoints are the imperative login/logout surface the UI would
//! otherwise invoke directly.

mod health_routes;
mod metrics;
mod session_routes;
mod view_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// The view router is merged last: it owns the wildcard, and the explicit
/// session/health/metrics paths take precedence over it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(session_routes::routes())
        .merge(health_routes::routes())
        .merge(metrics::routes())
        .merge(view_routes::routes())
        .with_state(state)
}
