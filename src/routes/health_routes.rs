//! Health check endpoints.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Simple health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
